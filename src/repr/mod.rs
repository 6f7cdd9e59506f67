/*!
# Graph Representation

[`Graph`] owns a fixed number of vertices, its directedness and three views that are kept in sync
by [`GraphEdgeEditing::add_weighted_edge`]:

- [`AdjacencyMatrix`]: `n x n` weights, `0` meaning *no edge*,
- [`AdjacencyLists`]: `(neighbor, weight)` pairs per vertex in insertion order,
- the edge list: every added `Edge(u, v)` in insertion order.

The [`IncidenceMatrix`] is built from the edge list on first access and cached. Every edge
insertion empties the cache, so the next access rebuilds it and it is never stale.

```
use matgraphs::prelude::*;

let mut graph = Graph::new(3, false).unwrap();
graph.add_weighted_edge(0, 2, 7).unwrap();

assert_eq!(graph.weight_of(2, 0), 7);
assert_eq!(graph.adjacency_list().of(2), &[(0, 7)]);
assert_eq!(graph.incidence_matrix().to_rows(), vec![vec![7], vec![0], vec![7]]);
```
*/

use std::cell::OnceCell;

use crate::{
    edge::*,
    error::{GraphError, Result},
    node::*,
    ops::*,
    testing::test_graph_ops,
};

mod incidence;
mod list;
mod matrix;

pub use incidence::*;
pub use list::*;
pub use matrix::*;

/// Construction options of a [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// If *true* (default), an undirected edge `(u, v)` is appended to the adjacency lists of
    /// both `u` and `v`. If *false*, only `u`'s list receives an entry, so for undirected graphs
    /// the lists only cover half of what the matrix stores.
    pub mirror_undirected_edges: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            mirror_undirected_edges: true,
        }
    }
}

impl GraphOptions {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether undirected edges are mirrored in the adjacency lists
    pub fn mirror_undirected_edges(mut self, mirror: bool) -> Self {
        self.mirror_undirected_edges = mirror;
        self
    }
}

/// A weighted graph with a fixed number of vertices, see the [module documentation](self).
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    options: GraphOptions,
    matrix: AdjacencyMatrix,
    lists: AdjacencyLists,
    edges: Vec<Edge>,
    incidence: OnceCell<IncidenceMatrix>,
}

impl Graph {
    /// Creates a graph with `n` isolated vertices.
    ///
    /// # Errors
    /// `GraphError::Construction` if `n == 0`
    pub fn new(n: NumNodes, directed: bool) -> Result<Self> {
        Self::with_options(n, directed, GraphOptions::default())
    }

    /// Creates a graph with `n` isolated vertices and the given options.
    ///
    /// # Errors
    /// `GraphError::Construction` if `n == 0`
    pub fn with_options(n: NumNodes, directed: bool, options: GraphOptions) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::Construction(n));
        }

        Ok(Self {
            directed,
            options,
            matrix: AdjacencyMatrix::new(n),
            lists: AdjacencyLists::new(n),
            edges: Vec::new(),
            incidence: OnceCell::new(),
        })
    }

    /// Creates a graph with `n` vertices and all given edges with weight [`DEFAULT_WEIGHT`]
    ///
    /// ```
    /// use matgraphs::prelude::*;
    ///
    /// let graph = Graph::from_edges(3, true, [(0, 1), (1, 2)]).unwrap();
    /// assert!(graph.has_edge(1, 2));
    /// assert!(!graph.has_edge(2, 1));
    /// ```
    pub fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n, directed)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Creates a graph with `n` vertices and all given weighted edges `(u, v, weight)`
    pub fn from_weighted_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = (Node, Node, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::new(n, directed)?;
        graph.add_weighted_edges(edges)?;
        Ok(graph)
    }

    /// Returns the options this graph was created with
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Returns the adjacency matrix
    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Returns the adjacency lists
    pub fn adjacency_list(&self) -> &AdjacencyLists {
        &self.lists
    }

    /// Returns all edges in the order they were added
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the incidence matrix, building it from the edge list if an edge was added since
    /// the last call
    pub fn incidence_matrix(&self) -> &IncidenceMatrix {
        self.incidence
            .get_or_init(|| IncidenceMatrix::build(&self.matrix, &self.edges, self.directed))
    }

    /// Returns *true* if the incidence matrix is currently cached
    pub fn has_cached_incidence(&self) -> bool {
        self.incidence.get().is_some()
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.matrix.number_of_nodes()
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl WeightedAdjacency for Graph {
    fn weight_of(&self, u: Node, v: Node) -> Weight {
        self.matrix.get(u, v)
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = WeightedNeighbor> + '_ {
        self.matrix
            .row(u)
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0)
            .map(|(v, &w)| (v as Node, w))
    }
}

impl GraphEdgeEditing for Graph {
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if weight == 0 {
            return Err(GraphError::InvalidWeight { u, v });
        }

        self.matrix.set(u, v, weight);
        self.lists.push(u, v, weight);

        if !self.directed {
            self.matrix.set(v, u, weight);
            if self.options.mirror_undirected_edges && u != v {
                self.lists.push(v, u, weight);
            }
        }

        self.edges.push(Edge(u, v));
        self.incidence.take();

        Ok(())
    }
}

test_graph_ops!(undirected_graph_ops, false);
test_graph_ops!(directed_graph_ops, true);
