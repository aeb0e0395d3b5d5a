use std::cmp::Reverse;

use crate::partition::{Partition, Targets};

impl Partition {
    /// Pack whole counties into districts, largest county first.
    ///
    /// A county goes into the current district if it fits under the population
    /// cap; the district is closed once it reaches the floor. Counties that would
    /// overflow, and every county left once all districts are closed, are returned
    /// as a pool of precinct indices for the residual pass.
    pub(crate) fn seed_counties(&mut self, targets: &Targets) -> Vec<usize> {
        let map = self.map_handle();

        // Stable: equal sizes keep first-appearance order.
        let mut order = (0..map.counties().len()).collect::<Vec<_>>();
        order.sort_by_key(|&c| Reverse(map.counties()[c].len()));

        let mut district = 1;
        let mut population = 0u64;
        let mut pool = Vec::new();

        for county in order.into_iter().map(|c| &map.counties()[c]) {
            if district > self.num_districts() {
                pool.extend_from_slice(county.precincts());
                continue;
            }

            let county_pop = county.precincts().iter()
                .map(|&p| map.precinct(p).population())
                .sum::<u64>();

            if (population + county_pop) as f64 <= targets.cap() {
                for &p in county.precincts() { self.assign(p, district) }
                population += county_pop;

                if population as f64 >= targets.floor() {
                    district += 1;
                    population = 0;
                }
            } else {
                pool.extend_from_slice(county.precincts());
            }
        }

        tracing::debug!(
            seeded = self.assigned_count(),
            pooled = pool.len(),
            "seeded whole counties"
        );

        pool
    }
}
