use std::{
    collections::BTreeMap,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Result;
use serde_json::Value;

use crate::{
    config::GenerationConfig,
    map::PrecinctMap,
    plan::{Plan, Summary},
};

/// Result of a single generation run.
#[derive(Clone, Debug)]
pub struct Generation {
    /// Precinct id → district (1..=N).
    pub assignments: BTreeMap<String, u32>,
    pub summary: Summary,
    /// Wall-clock time spent generating the plan, once the map is built.
    pub elapsed: Duration,
}

/// Generate a starting plan from a GeoJSON FeatureCollection.
///
/// Fails if the document has no `features` array or the map has zero total
/// population. An empty feature list yields no assignments and a summary of
/// empty districts.
pub fn generate(geojson: &Value, config: &GenerationConfig) -> Result<Generation> {
    let (_, generation) = generate_plan(PrecinctMap::from_geojson(geojson)?, config)?;
    Ok(generation)
}

/// Run seeding, residual assignment and optimization over a loaded map.
///
/// Returns the finished [`Plan`] (for metrics or storage) alongside the
/// assignments, summary and elapsed time.
pub fn generate_plan(map: impl Into<Arc<PrecinctMap>>, config: &GenerationConfig) -> Result<(Plan, Generation)> {
    let start = Instant::now();

    let mut plan = Plan::new(map, config.clone());
    plan.generate()?;

    let generation = Generation {
        assignments: plan.get_assignments(),
        summary: plan.summary(),
        elapsed: start.elapsed(),
    };

    tracing::info!(
        precincts = plan.map().len(),
        districts = config.num_districts(),
        target = config.target_dem_share(),
        dem_seats = generation.summary.summary.dem_seats,
        rep_seats = generation.summary.summary.rep_seats,
        tossup_seats = generation.summary.summary.tossup_seats,
        elapsed_ms = generation.elapsed.as_millis() as u64,
        "generated districts"
    );

    Ok((plan, generation))
}
