use serde::Serialize;

use crate::{metrics::SeatSummary, plan::Plan};

/// Totals for one district as reported after generation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictSummary {
    pub district: u32,
    pub population: u64,
    pub dem_share: f64,
    pub rep_share: f64,
    /// Number of distinct counties in the district.
    pub counties: usize,
    /// Number of precincts in the district.
    pub precincts: usize,
}

/// Per-district totals and seat counts for a plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub target_dem_share: f64,
    pub districts: Vec<DistrictSummary>,
    pub summary: SeatSummary,
}

impl Plan {
    /// Summarize every district `1..=num_districts`, including empty ones.
    pub fn summary(&self) -> Summary {
        let stats = self.partition.all_district_stats();

        let districts = (1..=self.num_districts())
            .map(|district| {
                let stats = &stats[district as usize];
                let dem_share = stats.dem_share();
                DistrictSummary {
                    district,
                    population: stats.population,
                    dem_share,
                    rep_share: 1.0 - dem_share,
                    counties: stats.county_count(),
                    precincts: stats.precincts,
                }
            })
            .collect::<Vec<_>>();

        let shares = districts.iter().map(|d| d.dem_share).collect::<Vec<_>>();

        Summary {
            target_dem_share: self.config().target_dem_share(),
            summary: SeatSummary::from_shares(&shares),
            districts,
        }
    }
}
