use std::{collections::BTreeMap, sync::Arc};

use anyhow::{bail, Result};

use crate::{
    config::GenerationConfig,
    map::PrecinctMap,
    metrics::{compute_metrics, MetricsReport},
    partition::{Partition, Targets, MAX_OPTIMIZE_PASSES},
};

/// A districting plan: a precinct map, a generation config, and the current
/// assignment of precincts to districts.
#[derive(Clone, Debug)]
pub struct Plan {
    map: Arc<PrecinctMap>,
    config: GenerationConfig,
    pub(super) partition: Partition,
}

impl Plan {
    /// Create a new plan with every precinct unassigned.
    pub fn new(map: impl Into<Arc<PrecinctMap>>, config: GenerationConfig) -> Self {
        let map: Arc<PrecinctMap> = map.into();
        let partition = Partition::new(config.num_districts(), Arc::clone(&map));

        Self { map, config, partition }
    }

    /// Get an immutable reference to the map.
    #[inline] pub fn map(&self) -> &PrecinctMap { &self.map }

    #[inline] pub fn config(&self) -> &GenerationConfig { &self.config }

    /// Get the number of districts in this plan (excluding unassigned 0).
    #[inline] pub fn num_districts(&self) -> u32 { self.config.num_districts() }

    /// Population and partisan targets for the current map and config.
    pub(super) fn targets(&self) -> Result<Targets> {
        Targets::new(
            self.map.total_population(),
            self.map.len(),
            self.config.num_districts(),
            self.config.target_dem_share(),
        )
    }

    /// Build a starting map from scratch: pack whole counties, place the
    /// remaining precincts by score, then improve fairness along the borders.
    ///
    /// An empty map is left as is. Fails if the map has zero total population.
    pub fn generate(&mut self) -> Result<()> {
        if self.map.is_empty() { return Ok(()) }
        let targets = self.targets()?;

        self.partition.clear_assignments();
        let pool = self.partition.seed_counties(&targets);
        self.partition.assign_residual(&pool, &targets);
        let moves = self.partition.optimize_fairness(&targets, MAX_OPTIMIZE_PASSES);

        tracing::debug!(
            districts = self.num_districts(),
            target_pop = targets.target_pop(),
            pooled = pool.len(),
            moves,
            "generated plan"
        );

        Ok(())
    }

    /// Run only the border optimization on the current assignments.
    /// Returns the number of precincts moved.
    pub fn optimize(&mut self) -> Result<usize> {
        if self.map.is_empty() { return Ok(0) }
        let targets = self.targets()?;

        Ok(self.partition.optimize_fairness(&targets, MAX_OPTIMIZE_PASSES))
    }

    /// Set the precinct assignments for the plan.
    ///
    /// Precincts missing from `assignments` become unassigned; ids not in the map
    /// are ignored. Fails if any district is outside `0..=num_districts`.
    pub fn set_assignments(&mut self, assignments: &BTreeMap<String, u32>) -> Result<()> {
        if let Some((id, district)) = assignments.iter().find(|&(_, &d)| d > self.num_districts()) {
            bail!(
                "[Plan.set_assignments] district {district} for precinct '{id}' is outside 1..={}",
                self.num_districts()
            );
        }

        let unknown = assignments.keys().filter(|id| self.map.index_of(id).is_none()).count();
        if unknown > 0 {
            tracing::warn!(unknown, "ignoring assignments for precincts not in the map");
        }

        self.partition.set_assignments(
            self.map.precincts().iter()
                .map(|precinct| assignments.get(precinct.id()).copied().unwrap_or(0))
                .collect()
        );

        Ok(())
    }

    /// Get the precinct assignments for the plan, keyed by precinct id.
    /// Unassigned precincts are left out.
    #[inline]
    pub fn get_assignments(&self) -> BTreeMap<String, u32> {
        self.partition.assignments_by_id()
    }

    /// Compute the metrics report for the current assignments.
    pub fn metrics(&self) -> MetricsReport {
        compute_metrics(&self.map, &self.get_assignments(), self.num_districts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::FairnessPreset, error::ConfigurationError};
    use serde_json::json;

    fn four_precinct_map() -> PrecinctMap {
        let features = [(80, 20), (20, 80), (50, 50), (50, 50)].iter().enumerate()
            .map(|(i, &(dem, rep))| json!({
                "properties": { "id": format!("p{i}"), "population": 100, "dem": dem, "rep": rep, "county": "A" },
                "geometry": { "type": "Polygon", "coordinates": [[[i, 0], [i + 1, 0], [i + 1, 1], [i, 1], [i, 0]]] }
            }))
            .collect::<Vec<_>>();
        PrecinctMap::from_geojson(&json!({ "features": features })).unwrap()
    }

    #[test]
    fn generate_balances_four_precincts() {
        let config = GenerationConfig::with_preset(2, FairnessPreset::Fair).unwrap();
        let mut plan = Plan::new(four_precinct_map(), config);

        plan.generate().unwrap();

        let assignments = plan.get_assignments();
        assert_eq!(assignments.len(), 4);
        let metrics = plan.metrics();
        assert_eq!(metrics.by_district[&1].population, 200);
        assert_eq!(metrics.by_district[&2].population, 200);
    }

    #[test]
    fn generate_is_repeatable() {
        let config = GenerationConfig::with_preset(2, FairnessPreset::LeanD).unwrap();
        let mut plan = Plan::new(four_precinct_map(), config);

        plan.generate().unwrap();
        let first = plan.get_assignments();
        plan.generate().unwrap();

        assert_eq!(plan.get_assignments(), first);
        assert_eq!(plan.optimize().unwrap(), 0);
    }

    #[test]
    fn zero_population_is_rejected() {
        let map = PrecinctMap::from_geojson(&json!({ "features": [{ "properties": { "id": "a" } }] })).unwrap();
        let config = GenerationConfig::with_preset(1, FairnessPreset::Fair).unwrap();
        let mut plan = Plan::new(map, config);

        let err = plan.generate().unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigurationError>(), Some(&ConfigurationError::ZeroPopulation(1)));
    }

    #[test]
    fn empty_map_generates_nothing() {
        let config = GenerationConfig::with_preset(3, FairnessPreset::Fair).unwrap();
        let mut plan = Plan::new(PrecinctMap::default(), config);

        plan.generate().unwrap();
        assert!(plan.get_assignments().is_empty());
    }

    #[test]
    fn set_assignments_round_trips_and_validates() {
        let config = GenerationConfig::with_preset(2, FairnessPreset::Fair).unwrap();
        let mut plan = Plan::new(four_precinct_map(), config);

        let assignments = [("p0", 1), ("p1", 2), ("p3", 2), ("ghost", 1)].iter()
            .map(|&(id, d)| (id.to_string(), d))
            .collect::<BTreeMap<_, _>>();
        plan.set_assignments(&assignments).unwrap();

        let stored = plan.get_assignments();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored["p1"], 2);
        assert!(!stored.contains_key("p2"));

        let bad = BTreeMap::from([("p0".to_string(), 3)]);
        assert!(plan.set_assignments(&bad).is_err());
    }
}
