use geo::{Coord, MultiPolygon};

/// The smallest input unit: a stable id, population, two-party votes, and location.
#[derive(Clone, Debug)]
pub struct Precinct {
    pub(super) id: String,
    pub(super) population: u64,
    pub(super) dem: u64,
    pub(super) rep: u64,
    pub(super) county: usize, // index into PrecinctMap::counties
    pub(super) centroid: Coord<f64>,
    pub(super) geometry: Option<MultiPolygon<f64>>,
}

impl Precinct {
    #[inline] pub fn id(&self) -> &str { &self.id }

    #[inline] pub fn population(&self) -> u64 { self.population }

    #[inline] pub fn dem(&self) -> u64 { self.dem }

    #[inline] pub fn rep(&self) -> u64 { self.rep }

    /// Total two-party votes.
    #[inline] pub fn votes(&self) -> u64 { self.dem + self.rep }

    /// Democratic share of the two-party vote, 0.5 if there are no votes.
    #[inline]
    pub fn dem_share(&self) -> f64 { dem_share(self.dem, self.rep) }

    /// Index of this precinct's county group.
    #[inline] pub fn county_index(&self) -> usize { self.county }

    /// Vertex-average centroid of the outer ring (origin if the geometry was missing).
    #[inline] pub fn centroid(&self) -> Coord<f64> { self.centroid }

    #[inline] pub fn geometry(&self) -> Option<&MultiPolygon<f64>> { self.geometry.as_ref() }
}

/// `dem / (dem + rep)`, or 0.5 when there are no votes.
#[inline]
pub(crate) fn dem_share(dem: u64, rep: u64) -> f64 {
    let total = dem + rep;
    if total == 0 { 0.5 } else { dem as f64 / total as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dem_share_defaults_to_even_without_votes() {
        assert_eq!(dem_share(0, 0), 0.5);
        assert_eq!(dem_share(3, 1), 0.75);
        assert_eq!(dem_share(0, 10), 0.0);
    }
}
