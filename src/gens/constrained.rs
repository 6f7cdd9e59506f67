use std::ops::RangeInclusive;

use log::{debug, trace, warn};

use super::*;

/// Counters gathered while generating a graph, mainly for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of vertices drawn
    pub vertices: NumNodes,
    /// Number of edges drawn (and placed)
    pub edges: NumEdges,
    /// Number of sampled vertex pairs
    pub samples: u64,
    /// Number of sampled pairs that were rejected
    pub rejections: u64,
    /// Number of sampling rounds started, including the successful one
    pub attempts: u32,
}

/// Generator for random simple graphs with bounded degrees.
///
/// The generator can be parameterized via:
/// - `.nodes(range)`: range the number of vertices is drawn from (default `10..=10`)
/// - `.edges(range)`: range the number of edges is drawn from (default `10..=10`)
/// - `.directed(bool)`: whether the graph is directed (default *false*)
/// - `.max_degree(cap)`: cap on edges incident to a single vertex, never above `n - 1`
/// - `.max_incoming(cap)` / `.max_outgoing(cap)`: in/out caps, only applied to directed graphs
/// - `.weights(range)`: range edge weights are drawn from (default `1..=100`)
/// - `.options(options)`: [`GraphOptions`] of the produced graph
/// - `.max_attempts(k)`: restarts allowed after sampling got stuck (default `64`)
///
/// Edges are sampled by drawing `u, v` uniformly and rejecting the pair if it is a loop, if an
/// endpoint reached its degree cap, if `v` reached its in-cap or `u` its out-cap (directed only),
/// or if the edge already exists.
#[derive(Debug, Clone)]
pub struct RandomGraphGen {
    nodes: RangeInclusive<NumNodes>,
    edges: RangeInclusive<NumEdges>,
    directed: bool,
    max_degree: Option<NumNodes>,
    max_incoming: Option<NumNodes>,
    max_outgoing: Option<NumNodes>,
    weights: RangeInclusive<Weight>,
    options: GraphOptions,
    max_attempts: u32,
}

impl Default for RandomGraphGen {
    fn default() -> Self {
        Self {
            nodes: 10..=10,
            edges: 10..=10,
            directed: false,
            max_degree: None,
            max_incoming: None,
            max_outgoing: None,
            weights: 1..=100,
            options: GraphOptions::default(),
            max_attempts: 64,
        }
    }
}

impl NumNodesGen for RandomGraphGen {
    fn nodes(mut self, n: RangeInclusive<NumNodes>) -> Self {
        self.nodes = n;
        self
    }
}

impl NumEdgesGen for RandomGraphGen {
    fn edges(mut self, m: RangeInclusive<NumEdges>) -> Self {
        self.edges = m;
        self
    }
}

/// Effective per-vertex caps once the number of vertices is known
#[derive(Debug, Clone, Copy)]
struct Caps {
    degree: NumNodes,
    incoming: NumNodes,
    outgoing: NumNodes,
}

impl RandomGraphGen {
    /// Creates a new generator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the graph as directed (or not)
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Caps the number of edges incident to any vertex.
    /// `None` uses `n - 1`, the most a vertex can have in a simple graph.
    pub fn max_degree(mut self, cap: Option<NumNodes>) -> Self {
        self.max_degree = cap;
        self
    }

    /// Caps the number of edges entering any vertex (directed graphs only)
    pub fn max_incoming(mut self, cap: Option<NumNodes>) -> Self {
        self.max_incoming = cap;
        self
    }

    /// Caps the number of edges leaving any vertex (directed graphs only)
    pub fn max_outgoing(mut self, cap: Option<NumNodes>) -> Self {
        self.max_outgoing = cap;
        self
    }

    /// Sets the range edge weights are drawn from. Must not contain `0`.
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the options of the produced graph
    pub fn options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets how often sampling restarts from an empty graph after getting stuck (default `64`).
    /// Must be positive.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Checks the parameters that do not depend on the drawn counts
    fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(GraphError::InvalidConfig(format!(
                "empty vertex range {:?}",
                self.nodes
            )));
        }
        if *self.nodes.start() == 0 {
            return Err(GraphError::Construction(0));
        }
        if self.edges.is_empty() {
            return Err(GraphError::InvalidConfig(format!(
                "empty edge range {:?}",
                self.edges
            )));
        }
        if self.max_attempts == 0 {
            return Err(GraphError::InvalidConfig(
                "at least one sampling attempt is required".to_string(),
            ));
        }
        if self.weights.is_empty() || *self.weights.start() == 0 {
            return Err(GraphError::InvalidConfig(format!(
                "weight range {:?} must be non-empty and positive",
                self.weights
            )));
        }
        Ok(())
    }

    /// Derives the caps for `n` vertices and verifies that `m` edges fit under them
    fn caps_for(&self, n: NumNodes, m: NumEdges) -> Result<Caps> {
        let infeasible = |reason: String| {
            warn!("Rejecting generation of {m} edges on {n} vertices: {reason}");
            Err(GraphError::InfeasibleGeneration {
                vertices: n,
                edges: m,
                reason,
            })
        };

        let max_edges = max_simple_edges(n, self.directed);
        if m as u64 > max_edges {
            return infeasible(format!("a simple graph has at most {max_edges} edges"));
        }

        let degree = self.max_degree.map_or(n - 1, |cap| cap.min(n - 1));
        if 2 * m as u64 > n as u64 * degree as u64 {
            let bound = n as u64 * degree as u64 / 2;
            return infeasible(format!("degree cap {degree} allows at most {bound} edges"));
        }

        let unbounded = NumNodes::MAX;
        let (incoming, outgoing) = if self.directed {
            (
                self.max_incoming.unwrap_or(unbounded),
                self.max_outgoing.unwrap_or(unbounded),
            )
        } else {
            (unbounded, unbounded)
        };

        for (cap, kind) in [(incoming, "incoming"), (outgoing, "outgoing")] {
            if m as u64 > n as u64 * cap as u64 {
                let bound = n as u64 * cap as u64;
                return infeasible(format!("{kind} cap {cap} allows at most {bound} edges"));
            }
        }

        Ok(Caps {
            degree,
            incoming,
            outgoing,
        })
    }

    /// Generates a random graph and returns it together with sampling counters.
    ///
    /// Rejection sampling can reach a state where no pair is admissible although a graph with
    /// `m` edges exists under the caps. Such an attempt is discarded and sampling restarts from an
    /// empty graph, at most [`RandomGraphGen::max_attempts`] times.
    ///
    /// # Errors
    /// - `Construction` / `InvalidConfig` if the parameters are inconsistent,
    /// - `InfeasibleGeneration` if the drawn edge count does not fit under the caps, or if every
    ///   attempt got stuck before placing all edges.
    pub fn generate_with_stats<R>(&self, rng: &mut R) -> Result<(Graph, GenerationStats)>
    where
        R: Rng,
    {
        self.validate()?;

        let n = rng.random_range(self.nodes.clone());
        let m = rng.random_range(self.edges.clone());
        let caps = self.caps_for(n, m)?;

        let mut stats = GenerationStats {
            vertices: n,
            edges: m,
            ..Default::default()
        };

        while stats.attempts < self.max_attempts {
            stats.attempts += 1;

            if let Some(graph) = self.try_sample(rng, n, m, caps, &mut stats)? {
                debug!(
                    "Generated {} graph with {n} vertices and {m} edges: {stats:?}",
                    if self.directed { "directed" } else { "undirected" }
                );
                return Ok((graph, stats));
            }
        }

        warn!("All {} attempts to place {m} edges on {n} vertices got stuck", self.max_attempts);
        Err(GraphError::InfeasibleGeneration {
            vertices: n,
            edges: m,
            reason: format!(
                "sampling got stuck in all {} attempts (the caps may not admit {m} edges)",
                self.max_attempts
            ),
        })
    }

    /// Runs one round of rejection sampling from an empty graph.
    /// Returns `None` if no admissible pair is left before all `m` edges are placed.
    fn try_sample<R>(
        &self,
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
        caps: Caps,
        stats: &mut GenerationStats,
    ) -> Result<Option<Graph>>
    where
        R: Rng,
    {
        let mut graph = Graph::with_options(n, self.directed, self.options)?;
        let mut counts = DegreeCounts::new(n, caps, self.directed);

        // After this many consecutive rejections we check whether any pair is admissible at all
        let stall_limit = n as u64 * n as u64;
        let mut streak = 0u64;

        for placed in 0..m {
            loop {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                stats.samples += 1;

                if counts.admits(&graph, u, v) {
                    let weight = rng.random_range(self.weights.clone());
                    graph.add_weighted_edge(u, v, weight)?;
                    counts.record(u, v);
                    streak = 0;
                    break;
                }

                stats.rejections += 1;
                streak += 1;
                if streak >= stall_limit {
                    if !counts.has_admissible_pair(&graph) {
                        trace!(
                            "Attempt {} got stuck after {placed} of {m} edges on {n} vertices",
                            stats.attempts
                        );
                        return Ok(None);
                    }
                    streak = 0;
                }
            }
        }

        Ok(Some(graph))
    }
}

impl GraphGenerator for RandomGraphGen {
    fn generate<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        self.generate_with_stats(rng).map(|(graph, _)| graph)
    }
}

/// Per-vertex edge counters used to enforce the caps while sampling
struct DegreeCounts {
    caps: Caps,
    directed: bool,
    total: Vec<NumNodes>,
    incoming: Vec<NumNodes>,
    outgoing: Vec<NumNodes>,
}

impl DegreeCounts {
    fn new(n: NumNodes, caps: Caps, directed: bool) -> Self {
        Self {
            caps,
            directed,
            total: vec![0; n as usize],
            incoming: vec![0; n as usize],
            outgoing: vec![0; n as usize],
        }
    }

    /// Returns *true* if `(u, v)` may be added as the next edge
    fn admits(&self, graph: &Graph, u: Node, v: Node) -> bool {
        let (ui, vi) = (u as usize, v as usize);

        if u == v {
            return false;
        }
        if self.total[ui] >= self.caps.degree || self.total[vi] >= self.caps.degree {
            return false;
        }
        if self.directed
            && (self.incoming[vi] >= self.caps.incoming || self.outgoing[ui] >= self.caps.outgoing)
        {
            return false;
        }

        !graph.has_edge(u, v)
    }

    fn has_admissible_pair(&self, graph: &Graph) -> bool {
        graph
            .vertices()
            .any(|u| graph.vertices().any(|v| self.admits(graph, u, v)))
    }

    fn record(&mut self, u: Node, v: Node) {
        self.total[u as usize] += 1;
        self.total[v as usize] += 1;
        if self.directed {
            self.incoming[v as usize] += 1;
            self.outgoing[u as usize] += 1;
        }
    }
}
