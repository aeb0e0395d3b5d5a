use std::path::Path;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::{
    common::io::{read_from_geojson_bytes, read_from_geojson_file, read_from_geojson_value, Feature},
    map::{county::UNKNOWN_COUNTY, Precinct, PrecinctMap},
};

const ID_KEYS: [&str; 2] = ["id", "precinct_id"];
const POPULATION_KEYS: [&str; 1] = ["population"];
const DEM_KEYS: [&str; 2] = ["dem", "dem_votes"];
const REP_KEYS: [&str; 2] = ["rep", "rep_votes"];
const COUNTY_KEYS: [&str; 4] = ["county", "COUNTY", "COUNTYFP", "COUNTYFP20"];

/// Largest count a single field may carry. Larger values are clamped so map
/// and district totals cannot overflow `u64`.
const MAX_COUNT: u64 = u32::MAX as u64;

impl PrecinctMap {
    /// Load precincts from a GeoJSON FeatureCollection file.
    pub fn read_from_geojson_file(path: &Path) -> Result<Self> {
        Ok(Self::from_features(read_from_geojson_file(path)?))
    }

    /// Load precincts from GeoJSON FeatureCollection bytes.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_features(read_from_geojson_bytes(bytes)?))
    }

    /// Load precincts from a parsed GeoJSON FeatureCollection.
    pub fn from_geojson(value: &Value) -> Result<Self> {
        Ok(Self::from_features(read_from_geojson_value(value)?))
    }

    /// Decode one feature. Missing or malformed fields fall back to defaults;
    /// this never fails.
    pub(in crate::map) fn decode_feature(index: usize, feature: Feature) -> (Precinct, String) {
        let props = &feature.properties;

        let id = first_label(props, &ID_KEYS).unwrap_or_else(|| format!("p_{index}"));
        let county = first_label(props, &COUNTY_KEYS).unwrap_or_else(|| UNKNOWN_COUNTY.to_string());

        let precinct = Precinct {
            id,
            population: first_count(props, &POPULATION_KEYS),
            dem: first_count(props, &DEM_KEYS),
            rep: first_count(props, &REP_KEYS),
            county: 0, // assigned when counties are grouped
            centroid: feature.centroid,
            geometry: feature.geometry,
        };

        (precinct, county)
    }
}

/// First key holding a non-empty string or a number, as a string.
fn first_label(props: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|&key| match props.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First key holding a positive count. Numbers and numeric strings are accepted;
/// fractions are truncated, values above [`MAX_COUNT`] are clamped, and anything
/// negative, non-finite or non-numeric reads as 0.
fn first_count(props: &Map<String, Value>, keys: &[&str]) -> u64 {
    keys.iter()
        .map(|&key| props.get(key).map_or(0, parse_count))
        .find(|&count| count > 0)
        .unwrap_or(0)
}

fn parse_count(value: &Value) -> u64 {
    let number = match value {
        Value::Number(n) => match n.as_u64() {
            Some(count) => return count.min(MAX_COUNT),
            None => n.as_f64(),
        },
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(x) if x.is_finite() && x > 0.0 => (x.trunc() as u64).min(MAX_COUNT),
        _ => 0,
    }
}
