use ahash::AHashSet;

use crate::map::{dem_share, Precinct};

/// Totals for one district, built by scanning its precincts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DistrictStats {
    pub(crate) population: u64,
    pub(crate) dem: u64,
    pub(crate) rep: u64,
    pub(crate) precincts: usize,
    pub(crate) counties: AHashSet<usize>,
}

impl DistrictStats {
    /// Accumulate a precinct into the totals.
    #[inline]
    pub(crate) fn add(&mut self, precinct: &Precinct) {
        self.population += precinct.population();
        self.dem += precinct.dem();
        self.rep += precinct.rep();
        self.precincts += 1;
        self.counties.insert(precinct.county_index());
    }

    /// Democratic share of the two-party vote, 0.5 with no votes.
    #[inline] pub(crate) fn dem_share(&self) -> f64 { dem_share(self.dem, self.rep) }

    /// Number of distinct counties touched by the district.
    #[inline] pub(crate) fn county_count(&self) -> usize { self.counties.len() }

    #[inline] pub(crate) fn has_county(&self, county: usize) -> bool { self.counties.contains(&county) }
}
