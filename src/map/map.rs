use ahash::AHashMap;

use crate::{
    common::io::Feature,
    graph::{build_adjacency, Graph, ADJACENCY_THRESHOLD},
    map::{county::group_by_county, County, Precinct},
};

/// Arena of precincts for a single generation run: an indexable precinct list,
/// an id lookup, county groups, and the neighbor graph over precinct indices.
#[derive(Clone, Debug, Default)]
pub struct PrecinctMap {
    precincts: Vec<Precinct>,
    index: AHashMap<String, usize>,
    counties: Vec<County>,
    graph: Graph,
}

impl PrecinctMap {
    /// Build the arena from decoded precinct records and their county labels.
    pub(super) fn from_records(records: Vec<(Precinct, String)>) -> Self {
        let (counties, membership) = group_by_county(records.iter().map(|(_, county)| county.as_str()));

        let precincts = records.into_iter().zip(membership)
            .map(|((precinct, _), county)| Precinct { county, ..precinct })
            .collect::<Vec<_>>();

        // Later duplicates shadow earlier ones, matching how assignments are keyed by id.
        let index = precincts.iter().enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        let graph = build_adjacency(
            &precincts.iter().map(Precinct::centroid).collect::<Vec<_>>(),
            &precincts.iter().map(Precinct::county_index).collect::<Vec<_>>(),
            ADJACENCY_THRESHOLD,
        );

        tracing::debug!(
            precincts = precincts.len(),
            counties = counties.len(),
            edges = graph.edge_count() / 2,
            max_degree = (0..graph.node_count()).map(|v| graph.degree(v)).max().unwrap_or(0),
            "built precinct map"
        );

        Self { precincts, index, counties, graph }
    }

    /// Build the arena from GeoJSON features (see `map::io` for field handling).
    pub(crate) fn from_features(features: Vec<Feature>) -> Self {
        Self::from_records(features.into_iter().enumerate()
            .map(|(i, feature)| Self::decode_feature(i, feature))
            .collect())
    }

    /// Number of precincts.
    #[inline] pub fn len(&self) -> usize { self.precincts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.precincts.is_empty() }

    /// Get a precinct by index.
    #[inline] pub fn precinct(&self, index: usize) -> &Precinct { &self.precincts[index] }

    /// All precincts, in input order.
    #[inline] pub fn precincts(&self) -> &[Precinct] { &self.precincts }

    /// Look up a precinct index by id.
    #[inline] pub fn index_of(&self, id: &str) -> Option<usize> { self.index.get(id).copied() }

    /// County groups, in order of first appearance.
    #[inline] pub fn counties(&self) -> &[County] { &self.counties }

    /// County label of a precinct.
    #[inline]
    pub fn county_label(&self, index: usize) -> &str {
        self.counties[self.precincts[index].county].label()
    }

    /// Indices of a precinct's neighbors, ascending.
    #[inline]
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.edges(index)
    }

    /// True if the two precincts are neighbors.
    #[inline] pub fn are_neighbors(&self, a: usize, b: usize) -> bool { self.graph.has_edge(a, b) }

    /// Sum of population over all precincts.
    pub fn total_population(&self) -> u64 { self.precincts.iter().map(Precinct::population).sum() }

    /// Sum of Democratic votes over all precincts.
    pub fn total_dem(&self) -> u64 { self.precincts.iter().map(Precinct::dem).sum() }

    /// Sum of Republican votes over all precincts.
    pub fn total_rep(&self) -> u64 { self.precincts.iter().map(Precinct::rep).sum() }
}
