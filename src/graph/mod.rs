mod adjacency;
mod graph;

pub(crate) use adjacency::{build_adjacency, ADJACENCY_THRESHOLD};
pub(crate) use graph::Graph;
