use std::fmt::{Debug, Display};

use crate::node::{Node, NumNodes};

/// An edge is defined by two nodes/endpoints.
/// Whether the edge is directed is decided by the graph it is added to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Weight of an edge. A weight of `0` in the adjacency matrix means *no edge*.
pub type Weight = u32;

/// Signed weight as stored in the incidence matrix (`-w` marks the head of a directed edge)
pub type SignedWeight = i64;

/// Entry of an adjacency list: the neighbor and the weight of the edge leading to it
pub type WeightedNeighbor = (Node, Weight);

/// Weight used by [`GraphEdgeEditing::add_edge`](crate::ops::GraphEdgeEditing::add_edge)
pub const DEFAULT_WEIGHT: Weight = 1;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// Maximum number of edges a simple graph (no loops, no parallel edges) on `n` nodes can have
pub fn max_simple_edges(n: NumNodes, directed: bool) -> u64 {
    let n = n as u64;
    let pairs = n * n.saturating_sub(1);
    if directed { pairs } else { pairs / 2 }
}
