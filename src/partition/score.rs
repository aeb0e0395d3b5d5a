use anyhow::{ensure, Result};

use crate::{
    config::MAX_POPULATION_DEVIATION,
    error::ConfigurationError,
    map::{dem_share, Precinct},
    partition::DistrictStats,
};

/// Per-district population target and partisan target for one run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Targets {
    target_pop: f64,
    target_dem_share: f64,
}

impl Targets {
    /// Derive targets from the map total. Fails if the total population is zero,
    /// since every population score divides by the target.
    pub(crate) fn new(total_population: u64, num_precincts: usize, num_districts: u32, target_dem_share: f64) -> Result<Self> {
        assert!(num_districts > 0, "num_districts must be at least 1");
        ensure!(total_population > 0, ConfigurationError::ZeroPopulation(num_precincts));

        Ok(Self {
            target_pop: total_population as f64 / num_districts as f64,
            target_dem_share,
        })
    }

    #[inline] pub(crate) fn target_pop(&self) -> f64 { self.target_pop }

    #[inline] pub(crate) fn target_dem_share(&self) -> f64 { self.target_dem_share }

    /// Largest population a district may reach before it stops accepting precincts.
    #[inline] pub(crate) fn cap(&self) -> f64 { self.target_pop * (1.0 + MAX_POPULATION_DEVIATION) }

    /// Population at which a seeded district counts as full.
    #[inline] pub(crate) fn floor(&self) -> f64 { self.target_pop * (1.0 - MAX_POPULATION_DEVIATION) }

    /// Score for adding `precinct` to a district with the given stats.
    ///
    /// Weighted 0.4 population balance, 0.3 partisan closeness, 0.2 if the
    /// district already holds the precinct's county, 0.1 if it holds a neighbor.
    pub(crate) fn residual_score(&self, stats: &DistrictStats, precinct: &Precinct, has_neighbor: bool) -> f64 {
        let new_pop = (stats.population + precinct.population()) as f64;
        let pop_score = 1.0 - (new_pop - self.target_pop).abs() / self.target_pop;

        let new_share = dem_share(stats.dem + precinct.dem(), stats.rep + precinct.rep());
        let partisan_score = 1.0 - (new_share - self.target_dem_share).abs();

        let county_bonus = if stats.has_county(precinct.county_index()) { 0.2 } else { 0.0 };
        let adjacency_bonus = if has_neighbor { 0.1 } else { 0.0 };

        0.4 * pop_score + 0.3 * partisan_score + county_bonus + adjacency_bonus
    }

    /// Mean fairness of a set of districts; an empty set scores 0.
    ///
    /// Each district scores `0.4·max(0, 1 − |pop − t|/t) + 0.4·max(0, 1 − 2·|share − target|)
    /// + 0.2/max(counties, 1)`.
    pub(crate) fn fairness<'a>(&self, districts: impl IntoIterator<Item = &'a DistrictStats>) -> f64 {
        let (total, count) = districts.into_iter()
            .fold((0.0, 0usize), |(total, count), stats| (total + self.district_fairness(stats), count + 1));

        if count == 0 { 0.0 } else { total / count as f64 }
    }

    fn district_fairness(&self, stats: &DistrictStats) -> f64 {
        let pop_score = (1.0 - (stats.population as f64 - self.target_pop).abs() / self.target_pop).max(0.0);
        let partisan_score = (1.0 - 2.0 * (stats.dem_share() - self.target_dem_share).abs()).max(0.0);
        let county_score = 1.0 / stats.county_count().max(1) as f64;

        0.4 * pop_score + 0.4 * partisan_score + 0.2 * county_score
    }
}
