/*!
Breadth-first and depth-first traversal with parent tracking.

Both searches share one iterator, [`PathSearch`], parameterized by its frontier:
- [`VecDeque`] -> queue semantics -> **BFS**
- [`Vec`] -> stack semantics -> **DFS**

A vertex is marked visited when it is *discovered* (pushed), not when it is popped, and its parent
is the vertex whose neighbor scan discovered it. Paths are reconstructed by walking parents back
from the target.
*/

use super::*;
use log::debug;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order.
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<Node> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Traversal iterator yielding vertices in the order they are popped from the frontier.
///
/// Neighbors of a popped vertex are scanned in increasing order. If a *scan break* is set,
/// the scan of the current vertex ends right after that vertex has been discovered; the
/// traversal itself carries on until the frontier is empty.
pub struct PathSearch<'a, G, S>
where
    G: WeightedAdjacency,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    parents: Vec<Option<OptionalNode>>,
    sequencer: S,
    scan_break: Option<Node>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = PathSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = PathSearch<'a, G, Vec<Node>>;

impl<'a, G, S> PathSearch<'a, G, S>
where
    G: WeightedAdjacency,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.is_vertex(start));

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        Self {
            graph,
            visited,
            parents: vec![None; graph.len()],
            sequencer: S::init(start),
            scan_break: None,
        }
    }

    /// Ends the neighbor scan of the current vertex as soon as `u` is discovered
    pub fn set_scan_break(&mut self, u: Node) {
        self.scan_break = Some(u);
    }

    /// Ends the neighbor scan of the current vertex as soon as `u` is discovered
    pub fn break_scan_at(mut self, u: Node) -> Self {
        self.set_scan_break(u);
        self
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns the vertex whose scan discovered `u`, or `None` for the start and undiscovered vertices
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parents[u as usize].map(|p| p.get())
    }

    /// Returns the path from the start to `target` along parent pointers discovered so far,
    /// or an empty vector if `target` was not discovered
    pub fn path_to(&self, target: Node) -> Vec<Node> {
        if !self.did_visit_node(target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut u = target;
        while let Some(p) = self.parent_of(u) {
            path.push(p);
            u = p;
        }

        path.reverse();
        path
    }
}

impl<G, S> Iterator for PathSearch<'_, G, S>
where
    G: WeightedAdjacency,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;
        let graph = self.graph;

        for v in graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.parents[v as usize] = OptionalNode::new(u);
                self.sequencer.push(v);

                if self.scan_break == Some(v) {
                    break;
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), Some(self.graph.len()))
    }
}

/// Provides traversal and path search methods on graphs
pub trait Traversal: WeightedAdjacency {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use matgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, false, [(0, 2), (0, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use matgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, false, [(0, 2), (0, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Computes a **shortest path** (fewest edges) from `source` to `target` using BFS.
    ///
    /// Returns the path including both endpoints, `[source]` if `source == target`,
    /// or an empty vector if `target` is unreachable.
    ///
    /// # Errors
    /// `GraphError::InvalidVertex` if `source` or `target` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use matgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 3), (3, 2)]).unwrap();
    ///
    /// assert_eq!(g.bfs_shortest_path(0, 2).unwrap(), vec![0, 1, 2]);
    /// assert_eq!(g.bfs_shortest_path(3, 3).unwrap(), vec![3]);
    /// ```
    fn bfs_shortest_path(&self, source: Node, target: Node) -> Result<Vec<Node>> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let mut search = self.bfs(source);
        let explored = search.by_ref().count();
        let path = search.path_to(target);

        debug!("BFS {source} -> {target} explored {explored} vertices, path {path:?}");
        Ok(path)
    }

    /// Computes *a* path from `source` to `target` using DFS.
    ///
    /// The scan of a vertex stops once `target` is discovered, but the search goes on until the
    /// stack is empty. The path is not necessarily a shortest one.
    ///
    /// Returns the path including both endpoints, `[source]` if `source == target`,
    /// or an empty vector if `target` is unreachable.
    ///
    /// # Errors
    /// `GraphError::InvalidVertex` if `source` or `target` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use matgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 3), (3, 2)]).unwrap();
    ///
    /// let path = g.dfs_shortest_path(0, 2).unwrap();
    /// assert!(g.is_path(&path, 0, 2));
    /// ```
    fn dfs_shortest_path(&self, source: Node, target: Node) -> Result<Vec<Node>> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let mut search = self.dfs(source).break_scan_at(target);
        let explored = search.by_ref().count();
        let path = search.path_to(target);

        debug!("DFS {source} -> {target} explored {explored} vertices, path {path:?}");
        Ok(path)
    }
}

impl<G> Traversal for G where G: WeightedAdjacency {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    /// 0 - 1 - 2 and 0 - 3 - 2
    fn diamond() -> Graph {
        Graph::from_edges(4, false, [(0, 1), (1, 2), (0, 3), (3, 2)]).unwrap()
    }

    #[test]
    fn bfs_finds_shortest_path() {
        let graph = diamond();
        assert_eq!(graph.bfs_shortest_path(0, 2).unwrap(), vec![0, 1, 2]);
        assert_eq!(graph.bfs_shortest_path(2, 0).unwrap(), vec![2, 1, 0]);
        assert_eq!(graph.bfs_shortest_path(1, 3).unwrap().len(), 3);
    }

    #[test]
    fn dfs_finds_valid_path() {
        let graph = diamond();
        for (s, t) in graph.vertices().cartesian_product(graph.vertices()) {
            let path = graph.dfs_shortest_path(s, t).unwrap();
            assert!(graph.is_path(&path, s, t), "{s} -> {t}: {path:?}");
        }
    }

    #[test]
    fn dfs_explores_last_discovered_first() {
        assert_eq!(diamond().dfs_shortest_path(0, 2).unwrap(), vec![0, 3, 2]);
    }

    #[test]
    fn dfs_may_be_longer_than_bfs() {
        //  / 1 ------ \
        // 0            3
        //  \ 2 - 4 -- /
        let graph = Graph::from_edges(5, false, [(0, 1), (0, 2), (1, 3), (2, 4), (4, 3)]).unwrap();

        assert_eq!(graph.bfs_shortest_path(0, 3).unwrap(), vec![0, 1, 3]);
        assert_eq!(graph.dfs_shortest_path(0, 3).unwrap(), vec![0, 2, 4, 3]);
    }

    #[test]
    fn scan_break_only_ends_current_scan() {
        // 0 - 1 - 2 - 3 - 0
        let graph = Graph::from_edges(4, false, [(0, 1), (0, 3), (1, 2), (2, 3)]).unwrap();

        let mut search = graph.dfs(0).break_scan_at(1);
        assert_eq!(search.by_ref().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(search.parent_of(3), Some(2));
        assert_eq!(search.path_to(3), vec![0, 1, 2, 3]);

        let mut search = graph.dfs(0);
        search.by_ref().for_each(drop);
        assert_eq!(search.parent_of(3), Some(0));
        assert_eq!(search.path_to(3), vec![0, 3]);
    }

    #[test]
    fn trivial_paths() {
        let graph = diamond();
        for s in graph.vertices() {
            assert_eq!(graph.bfs_shortest_path(s, s).unwrap(), vec![s]);
            assert_eq!(graph.dfs_shortest_path(s, s).unwrap(), vec![s]);
        }

        let single = Graph::new(1, false).unwrap();
        assert_eq!(single.bfs_shortest_path(0, 0).unwrap(), vec![0]);
    }

    #[test]
    fn unreachable_target() {
        // 0 - 1   2 - 3
        let graph = Graph::from_edges(4, false, [(0, 1), (2, 3)]).unwrap();

        assert!(graph.bfs_shortest_path(0, 3).unwrap().is_empty());
        assert!(graph.dfs_shortest_path(0, 3).unwrap().is_empty());
        assert!(graph.bfs_shortest_path(3, 1).unwrap().is_empty());
        assert!(graph.dfs_shortest_path(3, 1).unwrap().is_empty());
    }

    #[test]
    fn directed_edges_are_one_way() {
        let graph = Graph::from_edges(3, true, [(0, 1), (1, 2)]).unwrap();

        assert_eq!(graph.bfs_shortest_path(0, 2).unwrap(), vec![0, 1, 2]);
        assert_eq!(graph.dfs_shortest_path(0, 2).unwrap(), vec![0, 1, 2]);
        assert!(graph.bfs_shortest_path(2, 0).unwrap().is_empty());
        assert!(graph.dfs_shortest_path(2, 0).unwrap().is_empty());
    }

    #[test]
    fn weights_are_ignored() {
        let graph = Graph::from_weighted_edges(3, false, [(0, 2, 100), (0, 1, 1), (1, 2, 1)]).unwrap();
        assert_eq!(graph.bfs_shortest_path(0, 2).unwrap(), vec![0, 2]);
    }

    #[test]
    fn invalid_vertices() {
        let graph = diamond();
        assert!(matches!(
            graph.bfs_shortest_path(4, 0),
            Err(GraphError::InvalidVertex { vertex: 4, .. })
        ));
        assert!(matches!(
            graph.dfs_shortest_path(0, 9),
            Err(GraphError::InvalidVertex { vertex: 9, .. })
        ));
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph =
            Graph::from_edges(6, false, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]).unwrap();

        assert_eq!(graph.bfs(1).collect_vec(), vec![1, 0, 2, 5, 4, 3]);

        let mut search = graph.bfs(1);
        search.by_ref().for_each(drop);
        assert_eq!(
            graph.vertices().map(|u| search.parent_of(u)).collect_vec(),
            vec![Some(1), None, Some(1), Some(4), Some(2), Some(0)]
        );
    }

    #[test]
    fn search_stays_in_component() {
        let graph = Graph::from_edges(5, false, [(0, 1), (3, 4)]).unwrap();
        let mut search = graph.bfs(3);

        assert_eq!(search.by_ref().collect_vec(), vec![3, 4]);
        assert!(!search.did_visit_node(0));
        assert!(search.path_to(1).is_empty());
    }
}
