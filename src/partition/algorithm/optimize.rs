use smallvec::SmallVec;

use crate::partition::{Partition, Targets};

/// Maximum number of passes over the border before the search gives up.
pub(crate) const MAX_OPTIMIZE_PASSES: usize = 100;

impl Partition {
    /// Greedy local search: move border precincts into neighboring districts while
    /// that raises the fairness of the two districts involved.
    ///
    /// - `max_passes`: upper bound on the number of passes over the border.
    ///
    /// Each pass visits the precincts that were on the border when it started, in
    /// index order. Destinations are the distinct districts of the precinct's
    /// neighbors, read live. A move is kept only if it strictly improves the pair's
    /// score, and the first such move ends the precinct's turn. Stops after a pass
    /// with no moves. Returns the total number of moves made.
    pub(crate) fn optimize_fairness(&mut self, targets: &Targets, max_passes: usize) -> usize {
        let map = self.map_handle();
        let mut total_moves = 0;

        for pass in 0..max_passes {
            let border = (0..self.num_precincts())
                .filter(|&p| self.is_border(p))
                .collect::<Vec<_>>();

            let mut moves = 0;
            for precinct in border {
                let origin = self.assignment(precinct);

                let mut destinations = SmallVec::<[u32; 8]>::new();
                for district in map.neighbors(precinct).map(|v| self.assignment(v)) {
                    if district != 0 && district != origin && !destinations.contains(&district) {
                        destinations.push(district);
                    }
                }

                for destination in destinations {
                    let before = targets.fairness([
                        &self.district_stats(origin),
                        &self.district_stats(destination),
                    ]);

                    self.assign(precinct, destination);
                    let after = targets.fairness([
                        &self.district_stats(origin),
                        &self.district_stats(destination),
                    ]);

                    if after > before {
                        moves += 1;
                        break;
                    }
                    self.assign(precinct, origin);
                }
            }

            tracing::debug!(pass, border_moves = moves, "optimization pass");
            total_moves += moves;
            if moves == 0 { break }
        }

        total_moves
    }
}
