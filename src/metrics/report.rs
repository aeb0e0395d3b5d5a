use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    common::geometry::{outer_area_perimeter, polsby_popper},
    map::{dem_share, PrecinctMap},
    metrics::{efficiency_gap, SeatSummary},
};

/// Totals and shape measures for one district.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictMetrics {
    pub population: u64,
    pub dem_votes: u64,
    pub rep_votes: u64,
    /// Democratic share of the two-party vote, 0.5 with no votes.
    pub partisan_lean: f64,
    /// Polsby–Popper score over the summed outer rings.
    pub compactness: f64,
    pub area: f64,
    pub perimeter: f64,
    /// `(population − target) / target`, where the target is the map total over the district count.
    pub population_deviation: f64,
}

/// Metrics for a whole plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub by_district: BTreeMap<u32, DistrictMetrics>,
    pub seats: SeatSummary,
    pub statewide_dem_share: f64,
    pub efficiency_gap: f64,
}

/// Compute per-district metrics for an id → district assignment.
///
/// Precincts whose id has no assignment, or whose district is outside
/// `1..=num_districts`, are skipped. Every district in range appears in the
/// report, empty or not. Purely informational; never fails.
pub fn compute_metrics(map: &PrecinctMap, assignments: &BTreeMap<String, u32>, num_districts: u32) -> MetricsReport {
    let mut by_district = (1..=num_districts)
        .map(|d| (d, DistrictMetrics::default()))
        .collect::<BTreeMap<_, _>>();

    let mut skipped = 0usize;
    for precinct in map.precincts() {
        let district = assignments.get(precinct.id()).copied().unwrap_or(0);
        let Some(metrics) = by_district.get_mut(&district) else {
            skipped += 1;
            continue;
        };

        metrics.population += precinct.population();
        metrics.dem_votes += precinct.dem();
        metrics.rep_votes += precinct.rep();

        if let Some(geometry) = precinct.geometry() {
            let (area, perimeter) = outer_area_perimeter(geometry);
            metrics.area += area;
            metrics.perimeter += perimeter;
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "precincts without a district were left out of the metrics");
    }

    let target_pop = map.total_population() as f64 / num_districts.max(1) as f64;
    for metrics in by_district.values_mut() {
        metrics.partisan_lean = dem_share(metrics.dem_votes, metrics.rep_votes);
        metrics.compactness = polsby_popper(metrics.area, metrics.perimeter);
        metrics.population_deviation = if target_pop > 0.0 {
            (metrics.population as f64 - target_pop) / target_pop
        } else {
            0.0
        };
    }

    let shares = by_district.values().map(|m| m.partisan_lean).collect::<Vec<_>>();

    MetricsReport {
        seats: SeatSummary::from_shares(&shares),
        statewide_dem_share: dem_share(map.total_dem(), map.total_rep()),
        efficiency_gap: efficiency_gap(by_district.values().map(|m| (m.dem_votes, m.rep_votes))),
        by_district,
    }
}
