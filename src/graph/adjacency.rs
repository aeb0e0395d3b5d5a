use geo::Coord;
use rstar::{primitives::GeomWithData, RTree};

use crate::graph::Graph;

/// Centroids closer than this (in input coordinate units, i.e. degrees) are neighbors.
pub(crate) const ADJACENCY_THRESHOLD: f64 = 0.01;

/// Build the proximity graph: `i` and `j` are neighbors iff their centroids are
/// strictly closer than `threshold`, or they share a county.
///
/// Produces the same edge set, with neighbor lists sorted ascending, as checking
/// every unordered pair. Distance candidates come from an R-tree; county pairs come
/// from the county buckets, so large single-county inputs remain quadratic in edges.
pub(crate) fn build_adjacency(centroids: &[Coord<f64>], counties: &[usize], threshold: f64) -> Graph {
    assert!(centroids.len() == counties.len(), "centroids.len() must equal counties.len()");
    let n = centroids.len();

    let mut adj_list: Vec<Vec<u32>> = vec![Vec::new(); n];

    // County cliques.
    let num_counties = counties.iter().max().map_or(0, |&c| c + 1);
    let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); num_counties];
    for (i, &county) in counties.iter().enumerate() {
        buckets[county].push(i as u32);
    }
    for bucket in &buckets {
        for &i in bucket {
            adj_list[i as usize].extend(bucket.iter().copied().filter(|&j| j != i));
        }
    }

    // Distance pairs across counties (same-county pairs are already linked).
    let rtree = RTree::bulk_load(centroids.iter().enumerate()
        .map(|(i, c)| GeomWithData::new([c.x, c.y], i))
        .collect::<Vec<_>>());

    // Pad the query radius slightly; the exact test below decides.
    let query_radius_2 = threshold * threshold * (1.0 + 1e-9);
    for (i, c) in centroids.iter().enumerate() {
        for candidate in rtree.locate_within_distance([c.x, c.y], query_radius_2) {
            let j = candidate.data;
            if j == i || counties[j] == counties[i] { continue }

            let [x, y] = *candidate.geom();
            if (c.x - x).hypot(c.y - y) < threshold {
                adj_list[i].push(j as u32);
            }
        }
    }

    for neighbors in &mut adj_list {
        neighbors.sort_unstable();
        neighbors.dedup();
    }

    Graph::new(n, &adj_list)
}
