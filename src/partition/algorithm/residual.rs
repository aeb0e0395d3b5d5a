use std::cmp::Ordering;

use crate::partition::{Partition, Targets};

impl Partition {
    /// Assign every pooled precinct to the best-scoring district under the cap.
    ///
    /// The pool is ordered toward the partisan target first (most Democratic
    /// first above 0.5, most Republican first below it, unchanged at 0.5). District
    /// totals are rescanned for every precinct, so each cap check sees the moves
    /// made before it. When every district is at the cap, the precinct goes to the
    /// least populated district.
    pub(crate) fn assign_residual(&mut self, pool: &[usize], targets: &Targets) {
        let map = self.map_handle();

        let mut pool = pool.to_vec();
        let target = targets.target_dem_share();
        match target.partial_cmp(&0.5) {
            Some(Ordering::Greater) => pool.sort_by(|&a, &b| {
                map.precinct(b).dem_share().total_cmp(&map.precinct(a).dem_share())
            }),
            Some(Ordering::Less) => pool.sort_by(|&a, &b| {
                map.precinct(a).dem_share().total_cmp(&map.precinct(b).dem_share())
            }),
            _ => {}
        }

        let mut fallbacks = 0usize;
        for precinct in pool {
            if self.assignment(precinct) != 0 { continue }

            let stats = self.all_district_stats();
            let candidate = map.precinct(precinct);

            // Strict comparison keeps the lowest district on ties.
            let best = (1..=self.num_districts())
                .filter(|&d| (stats[d as usize].population as f64) < targets.cap())
                .map(|d| (d, targets.residual_score(&stats[d as usize], candidate, self.has_neighbor_in(precinct, d))))
                .fold(None, |best: Option<(u32, f64)>, (d, score)| match best {
                    Some((_, best_score)) if score <= best_score => best,
                    _ => Some((d, score)),
                });

            let district = match best {
                Some((district, _)) => district,
                None => {
                    fallbacks += 1;
                    (1..=self.num_districts())
                        .min_by_key(|&d| stats[d as usize].population)
                        .unwrap_or(1)
                }
            };

            self.assign(precinct, district);
        }

        tracing::debug!(fallbacks, "assigned residual precincts");
    }
}
