/*!
`matgraphs` is a small library for **weighted graphs stored as an adjacency matrix**, together with
the two other classical views of the same graph and two unweighted path searches on top of it.

# Representation

We represent **vertices** as `u32` in the range `0..n` where `n` is fixed when the graph is created.
Edges are tuple-structs `Edge(Node, Node)` carrying the endpoints only; weights live in the matrix.

A [`Graph`](crate::repr::Graph) keeps three views in sync:

- the **adjacency matrix**, `n x n`, where cell `(u, v)` holds the weight of `u -> v` or `0`,
- the **adjacency list**, one `(neighbor, weight)` sequence per vertex in insertion order,
- the **edge list**, the authoritative order in which edges were added.

The **incidence matrix** (`n x m`) is derived from the edge list on first request and cached until
the next edge is added.

### Directed vs Undirected

- In an **undirected** graph, adding `Edge(u, v)` also sets the matrix cell `(v, u)`.
  By default the adjacency list is mirrored as well; see [`GraphOptions`](crate::repr::GraphOptions)
  for the historical one-sided behaviour.
- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are distinct.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, the graph operation traits and [`Graph`](crate::repr::Graph),
- [`gens`] includes the constrained random generator [`RandomGraphGen`](crate::gens::RandomGraphGen),
- [`algo`] includes breadth-first and depth-first path search (`graph.bfs_shortest_path(s, t)`),
- [`io`] includes console reports of the three representations.

```
use matgraphs::{prelude::*, algo::*};

let graph = Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 3), (3, 2)]).unwrap();

assert_eq!(graph.bfs_shortest_path(0, 2).unwrap(), vec![0, 1, 2]);
assert!(graph.is_path(&graph.dfs_shortest_path(0, 2).unwrap(), 0, 2));
```

Edge weights are stored and reported, but both searches only look at whether a weight is nonzero.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `matgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
