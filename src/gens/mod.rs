/*!
# Graph Generators

This module provides a builder for **constrained random graphs**: the number of vertices and edges
are drawn from ranges, and edges are placed by rejection sampling under per-vertex caps.

The typical usage workflow is:

1. Create a generator instance (`RandomGraphGen::new()`).
2. Set parameters using builder methods (e.g., `.nodes(5..=8).edges(6..=6)`).
3. Generate a graph via `generate(rng)`.

```
use matgraphs::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(7);
let graph = RandomGraphGen::new().nodes(5..=8).edges(6..=6).generate(rng).unwrap();

assert_eq!(graph.number_of_edges(), 6);
assert!(graph.edges().iter().all(|e| !e.is_loop()));
```

Infeasible requests are rejected with [`GraphError::InfeasibleGeneration`] instead of sampling
forever.
*/

use rand::Rng;

use crate::prelude::*;

mod constrained;

pub use constrained::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the range the number of nodes is drawn from.
    fn nodes(self, n: std::ops::RangeInclusive<NumNodes>) -> Self;

    /// Sets a fixed number of nodes.
    fn exact_nodes(self, n: NumNodes) -> Self {
        self.nodes(n..=n)
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the range the number of edges is drawn from.
    fn edges(self, m: std::ops::RangeInclusive<NumEdges>) -> Self;

    /// Sets a fixed number of edges.
    fn exact_edges(self, m: NumEdges) -> Self {
        self.edges(m..=m)
    }
}

/// General trait for a configurable random graph generator.
pub trait GraphGenerator {
    /// Generates a random graph.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or cannot be satisfied.
    fn generate<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng;
}
