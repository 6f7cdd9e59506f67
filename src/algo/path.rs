use super::*;
use itertools::Itertools;

/// Checks and measures vertex sequences against a graph
pub trait PathCheck: WeightedAdjacency {
    /// Returns *true* if `path` starts at `source`, ends at `target` and every consecutive pair
    /// of vertices is connected by an edge. `[source]` is a path iff `source == target`.
    ///
    /// # Examples
    /// ```
    /// use matgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, true, [(0, 1), (1, 2)]).unwrap();
    ///
    /// assert!(g.is_path(&[0, 1, 2], 0, 2));
    /// assert!(!g.is_path(&[2, 1, 0], 2, 0));
    /// assert!(!g.is_path(&[], 0, 0));
    /// ```
    fn is_path(&self, path: &[Node], source: Node, target: Node) -> bool {
        path.first() == Some(&source)
            && path.last() == Some(&target)
            && path.iter().all(|&u| self.is_vertex(u))
            && path.iter().tuple_windows().all(|(&u, &v)| self.has_edge(u, v))
    }

    /// Returns the sum of edge weights along `path`, or `None` if `path` uses a missing edge.
    /// Empty and single-vertex paths weigh `0`.
    /// ** Panics if `path` contains a vertex `>= n` **
    fn path_weight(&self, path: &[Node]) -> Option<u64> {
        path.iter().tuple_windows().try_fold(0u64, |acc, (&u, &v)| {
            let w = self.weight_of(u, v);
            (w != 0).then(|| acc + w as u64)
        })
    }
}

impl<G> PathCheck for G where G: WeightedAdjacency {}
