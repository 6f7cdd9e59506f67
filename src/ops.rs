use std::ops::Range;

use crate::{
    edge::*,
    error::{Result, raise_unless_vertex},
    node::*,
};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    /// The range does not borrow self and hence may be used where mutable references of self are needed
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn is_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `GraphError::InvalidVertex` if `u` is not a vertex of the graph
    fn check_vertex(&self, u: Node) -> Result<()> {
        raise_unless_vertex!(u, self.number_of_nodes());
        Ok(())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, i.e. the number of `add_edge` calls
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Directedness of a graph.
///
/// Unlike representations with a compile-time marker, directedness is chosen when the graph is
/// constructed, so this is a runtime query.
pub trait GraphType {
    /// Returns *true* if `Edge(u, v)` and `Edge(v, u)` are distinct
    fn is_directed(&self) -> bool;

    /// Returns *true* if adding `Edge(u, v)` also connects `v` to `u`
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Read access to the weighted adjacency of a graph.
///
/// Neighborhoods are always reported in increasing vertex order, which is the order both
/// searches in [`crate::algo`] explore them in.
pub trait WeightedAdjacency: GraphNodeOrder + Sized {
    /// Returns the weight of the edge `(u, v)` or `0` if there is none.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Weight;

    /// Returns *true* if the edge `(u, v)` exists, i.e. has nonzero weight.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v) != 0
    }

    /// Returns an iterator over `(v, weight)` for all (outgoing) neighbors `v` of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = WeightedNeighbor> + '_;

    /// Returns an iterator over all (outgoing) neighbors of `u`.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }
}

/// Provides functions to insert edges. There is no removal: graphs only grow.
pub trait GraphEdgeEditing {
    /// Adds the edge *(u,v)* with the given weight to the graph.
    ///
    /// # Errors
    /// - `InvalidVertex` if `u >= n || v >= n`
    /// - `InvalidWeight` if `weight == 0`
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()>;

    /// Adds the edge *(u,v)* with weight [`DEFAULT_WEIGHT`] to the graph.
    ///
    /// # Errors
    /// `InvalidVertex` if `u >= n || v >= n`
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Adds all edges in the collection with weight [`DEFAULT_WEIGHT`].
    /// Stops at the first invalid edge; edges before it stay in the graph.
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Adds all weighted edges `(u, v, weight)` in the collection.
    /// Stops at the first invalid edge; edges before it stay in the graph.
    fn add_weighted_edges(
        &mut self,
        edges: impl IntoIterator<Item = (Node, Node, Weight)>,
    ) -> Result<()> {
        for (u, v, weight) in edges {
            self.add_weighted_edge(u, v, weight)?;
        }
        Ok(())
    }
}
