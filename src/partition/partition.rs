use std::{collections::BTreeMap, sync::Arc};

use crate::{map::PrecinctMap, partition::DistrictStats};

/// Assignment of every precinct in a map to a district (1..=N), or 0 if unassigned.
///
/// District totals are never cached: every stats query rescans the assignment,
/// so they cannot drift out of date as precincts move.
#[derive(Clone, Debug)]
pub(crate) struct Partition {
    num_districts: u32,
    assignments: Vec<u32>,  // index-parallel with map precincts; 0 = unassigned
    map: Arc<PrecinctMap>,  // Reference to the precinct arena
}

impl Partition {
    /// Construct an empty partition with `num_districts` districts.
    pub(crate) fn new(num_districts: u32, map: impl Into<Arc<PrecinctMap>>) -> Self {
        assert!(num_districts > 0, "num_districts must be at least 1");
        let map: Arc<PrecinctMap> = map.into();

        Self { num_districts, assignments: vec![0; map.len()], map }
    }

    /// Get the number of districts (excluding unassigned 0).
    #[inline] pub(crate) fn num_districts(&self) -> u32 { self.num_districts }

    /// Get the number of precincts in the underlying map.
    #[inline] pub(crate) fn num_precincts(&self) -> usize { self.assignments.len() }

    /// Get a shared handle to the underlying map.
    #[inline] pub(crate) fn map_handle(&self) -> Arc<PrecinctMap> { Arc::clone(&self.map) }

    /// Get the district of a given precinct (0 if unassigned).
    #[inline] pub(crate) fn assignment(&self, precinct: usize) -> u32 { self.assignments[precinct] }

    /// Get the full assignment vector.
    #[inline] pub(crate) fn assignments(&self) -> &[u32] { &self.assignments }

    /// Assign a precinct to a district (0 to unassign).
    #[inline]
    pub(crate) fn assign(&mut self, precinct: usize, district: u32) {
        debug_assert!(district <= self.num_districts, "district {district} out of range");
        self.assignments[precinct] = district;
    }

    /// Clear all assignments, setting every precinct to unassigned (0).
    pub(crate) fn clear_assignments(&mut self) { self.assignments.fill(0) }

    /// Replace all assignments at once.
    pub(crate) fn set_assignments(&mut self, assignments: Vec<u32>) {
        assert!(assignments.len() == self.num_precincts(), "assignments.len() must equal number of precincts");
        assert!(
            assignments.iter().all(|&d| d <= self.num_districts),
            "all assignments must be in range [0, {}]", self.num_districts
        );
        self.assignments = assignments;
    }

    /// Number of precincts currently assigned to some district.
    pub(crate) fn assigned_count(&self) -> usize {
        self.assignments.iter().filter(|&&d| d != 0).count()
    }

    /// True if the precinct is assigned and has an assigned neighbor in another district.
    pub(crate) fn is_border(&self, precinct: usize) -> bool {
        let district = self.assignment(precinct);
        district != 0 && self.map.neighbors(precinct).any(|v| {
            let other = self.assignment(v);
            other != 0 && other != district
        })
    }

    /// True if any neighbor of the precinct is assigned to `district`.
    pub(crate) fn has_neighbor_in(&self, precinct: usize, district: u32) -> bool {
        self.map.neighbors(precinct).any(|v| self.assignment(v) == district)
    }

    /// Stats for one district, recomputed by scanning every precinct.
    pub(crate) fn district_stats(&self, district: u32) -> DistrictStats {
        let mut stats = DistrictStats::default();
        for (precinct, _) in self.assignments.iter().enumerate().filter(|&(_, &d)| d == district) {
            stats.add(self.map.precinct(precinct));
        }
        stats
    }

    /// Stats for every district in a single scan; element `d` holds district `d`
    /// (element 0 collects unassigned precincts).
    pub(crate) fn all_district_stats(&self) -> Vec<DistrictStats> {
        let mut stats = vec![DistrictStats::default(); self.num_districts as usize + 1];
        for (precinct, &district) in self.assignments.iter().enumerate() {
            stats[district as usize].add(self.map.precinct(precinct));
        }
        stats
    }

    /// Map each precinct id to its district, skipping unassigned precincts.
    /// If ids repeat, the last precinct with that id wins.
    pub(crate) fn assignments_by_id(&self) -> BTreeMap<String, u32> {
        self.map.precincts().iter().zip(&self.assignments)
            .filter(|&(_, &district)| district != 0)
            .map(|(precinct, &district)| (precinct.id().to_string(), district))
            .collect()
    }
}
