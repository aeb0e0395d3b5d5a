/// An unweighted, undirected graph in compressed sparse row format.
#[derive(Clone, Debug, Default)]
pub(crate) struct Graph {
    size: usize,
    offsets: Vec<u32>,
    edges: Vec<u32>,
}

impl Graph {
    /// Construct a graph from per-node adjacency lists.
    pub(crate) fn new(num_nodes: usize, edges: &[Vec<u32>]) -> Self {
        assert!(edges.len() == num_nodes, "edges.len() must equal num_nodes");
        debug_assert!(
            edges.iter().flatten().all(|&v| (v as usize) < num_nodes),
            "edge endpoints must be < num_nodes"
        );
        debug_assert!(
            edges.iter().all(|list| list.windows(2).all(|w| w[0] < w[1])),
            "neighbor lists must be sorted ascending"
        );

        Self {
            size: num_nodes,
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().copied().collect(),
        }
    }

    /// Get the number of nodes in the graph.
    #[inline] pub(crate) fn node_count(&self) -> usize { self.size }

    /// Get the number of directed edge entries (twice the undirected edge count).
    #[inline] pub(crate) fn edge_count(&self) -> usize { self.edges.len() }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub(crate) fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub(crate) fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }

    /// Check whether `v` appears in the neighbor list of `u`. Neighbor lists are sorted.
    #[inline]
    pub(crate) fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edges[self.range(u)].binary_search(&(v as u32)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        Graph::new(
            4,
            &[
                vec![1, 2],       // 0
                vec![0, 2],       // 1
                vec![0, 1, 3],    // 2
                vec![2],          // 3
            ],
        )
    }

    #[test]
    fn csr_graph_construction() {
        let graph = make_test_graph();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 8);

        // Offsets are cumulative neighbor counts, len = nodes + 1
        assert_eq!(graph.offsets, vec![0, 2, 4, 7, 8]);
        assert_eq!(graph.edges, vec![1, 2, 0, 2, 0, 1, 3, 2]);

        for window in graph.offsets.windows(2) { assert!(window[0] <= window[1]) }
    }

    #[test]
    fn degree_matches_offsets() {
        let graph = make_test_graph();

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.degree(3), 1);
    }

    #[test]
    fn edge_iterators_preserve_order() {
        let graph = make_test_graph();
        assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert!(graph.has_edge(2, 3));
        assert!(!graph.has_edge(3, 0));
    }

    #[test]
    fn has_edge_searches_sorted_neighbor_lists() {
        let graph = Graph::new(6, &[
            vec![1, 3, 5],
            vec![0],
            vec![],
            vec![0, 4],
            vec![3],
            vec![0],
        ]);

        let expected = [(0, 1), (0, 3), (0, 5), (1, 0), (3, 0), (3, 4), (4, 3), (5, 0)];
        for u in 0..6 {
            for v in 0..6 {
                assert_eq!(graph.has_edge(u, v), expected.contains(&(u, v)), "({u}, {v})");
            }
        }
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = Graph::new(0, &[]);

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.offsets, vec![0]);
    }

    #[test]
    fn isolated_nodes_have_zero_degree_and_no_edges() {
        let graph = Graph::new(3, &[vec![], vec![], vec![]]);

        assert_eq!(graph.offsets, vec![0, 0, 0, 0]);
        for n in 0..3 {
            assert_eq!(graph.degree(n), 0);
            assert!(graph.edges(n).next().is_none());
        }
    }

    #[test]
    #[should_panic(expected = "edges.len() must equal num_nodes")]
    fn new_panics_when_edges_len_mismatch() {
        Graph::new(0, &[vec![]]);
    }

    #[test]
    #[should_panic]
    fn degree_panics_for_out_of_bounds_node() {
        let graph = make_test_graph();
        graph.degree(graph.node_count());
    }
}
