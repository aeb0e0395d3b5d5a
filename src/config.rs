use std::{fmt, str::FromStr};

use anyhow::{anyhow, ensure, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Allowed relative deviation from the per-district population target.
pub const MAX_POPULATION_DEVIATION: f64 = 0.10;

/// Named bundle of a partisan target and its (informational) tolerance band.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessPreset {
    VeryR,
    LeanR,
    #[default]
    Fair,
    LeanD,
    VeryD,
}

impl FairnessPreset {
    /// All presets, ordered from most Republican to most Democratic.
    pub const ALL: [FairnessPreset; 5] = [Self::VeryR, Self::LeanR, Self::Fair, Self::LeanD, Self::VeryD];

    /// Target Democratic share of the two-party vote.
    #[inline]
    pub fn target_dem_share(self) -> f64 {
        match self {
            Self::VeryR => 0.40,
            Self::LeanR => 0.46,
            Self::Fair  => 0.50,
            Self::LeanD => 0.54,
            Self::VeryD => 0.60,
        }
    }

    /// Tolerance band around the target. Carried as metadata only.
    #[inline]
    pub fn tolerance(self) -> f64 {
        match self {
            Self::VeryR | Self::VeryD => 0.05,
            Self::LeanR | Self::LeanD => 0.03,
            Self::Fair => 0.02,
        }
    }

    /// Machine name, e.g. `lean_d`.
    pub fn name(self) -> &'static str {
        match self {
            Self::VeryR => "very_r",
            Self::LeanR => "lean_r",
            Self::Fair  => "fair",
            Self::LeanD => "lean_d",
            Self::VeryD => "very_d",
        }
    }

    /// Human-readable label, e.g. `Lean D`.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryR => "Very R",
            Self::LeanR => "Lean R",
            Self::Fair  => "Fair",
            Self::LeanD => "Lean D",
            Self::VeryD => "Very D",
        }
    }

    /// One-line description shown next to the preset in listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::VeryR => "Strongly Republican-favoring map",
            Self::LeanR => "Slightly Republican-favoring map",
            Self::Fair  => "Balanced, competitive districts",
            Self::LeanD => "Slightly Democratic-favoring map",
            Self::VeryD => "Strongly Democratic-favoring map",
        }
    }

    /// Look up a preset by machine name, falling back to `Fair` for unknown names.
    pub fn from_name_or_fair(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(preset = name, "unknown fairness preset, using 'fair'");
            Self::Fair
        })
    }
}

impl FromStr for FairnessPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!(
                "unknown fairness preset '{s}' (expected one of: very_r, lean_r, fair, lean_d, very_d)"
            ))
    }
}

impl fmt::Display for FairnessPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters for a single generation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    num_districts: u32,
    preset: FairnessPreset,
    target_dem_share: f64,
    custom_target: bool,
}

impl GenerationConfig {
    /// Build a config from a preset, optionally overriding its target share.
    ///
    /// A custom target outside `[0, 1]` (or NaN) is ignored and the preset's
    /// target is used instead.
    pub fn new(num_districts: u32, preset: FairnessPreset, custom_target: Option<f64>) -> Result<Self> {
        ensure!(num_districts >= 1, ConfigurationError::InvalidDistrictCount(num_districts));

        let custom_target = custom_target.filter(|target| {
            let valid = (0.0..=1.0).contains(target);
            if !valid {
                tracing::warn!(custom_target = *target, "custom target dem share outside [0, 1], using preset target");
            }
            valid
        });

        Ok(Self {
            num_districts,
            preset,
            target_dem_share: custom_target.unwrap_or(preset.target_dem_share()),
            custom_target: custom_target.is_some(),
        })
    }

    /// Shorthand for a preset config with no custom target.
    #[inline]
    pub fn with_preset(num_districts: u32, preset: FairnessPreset) -> Result<Self> {
        Self::new(num_districts, preset, None)
    }

    #[inline] pub fn num_districts(&self) -> u32 { self.num_districts }

    #[inline] pub fn preset(&self) -> FairnessPreset { self.preset }

    #[inline] pub fn target_dem_share(&self) -> f64 { self.target_dem_share }

    /// True if the target share came from a custom override rather than the preset.
    #[inline] pub fn has_custom_target(&self) -> bool { self.custom_target }

    /// Preset tolerance band (informational).
    #[inline] pub fn tolerance(&self) -> f64 { self.preset.tolerance() }

    /// Hard population deviation cap used in scoring.
    #[inline] pub fn max_population_deviation(&self) -> f64 { MAX_POPULATION_DEVIATION }

    /// Label describing where the target came from, e.g. `Lean D` or `Custom`.
    pub fn label(&self) -> &'static str {
        if self.custom_target { "Custom" } else { self.preset.label() }
    }
}
