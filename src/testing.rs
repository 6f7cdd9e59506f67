/// Every graph should keep its matrix, lists, edge list and incidence matrix consistent.
/// Generates randomized tests for either directed or undirected graphs.
macro_rules! test_graph_ops {
    ($env:ident, $directed:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random weighted edges for nodes `0..n`.
            /// Loops and repeated pairs are intentionally included.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<(Node, Node, Weight)> {
                (0..m)
                    .map(|_| {
                        (
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(1..=100),
                        )
                    })
                    .collect_vec()
            }

            fn random_graphs() -> impl Iterator<Item = Graph> {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);
                let mut graphs = Vec::new();

                for n in [1 as NumNodes, 2, 10, 20] {
                    for m in [0 as NumEdges, n, n * 3] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, m);
                            graphs.push(Graph::from_weighted_edges(n, $directed, edges).unwrap());
                        }
                    }
                }

                graphs.into_iter()
            }

            #[test]
            fn graph_new() {
                for n in 1..30 {
                    let graph = Graph::new(n, $directed).unwrap();

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.is_directed(), $directed);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.incidence_matrix().number_of_nodes(), n);
                }
            }

            #[test]
            fn matrix_entries_come_from_edges() {
                for graph in random_graphs() {
                    for u in graph.vertices() {
                        for v in graph.neighbors_of(u) {
                            assert!(
                                graph.edges().contains(&Edge(u, v))
                                    || graph.edges().contains(&Edge(v, u))
                            );
                        }
                    }

                    for &Edge(u, v) in graph.edges() {
                        assert!(graph.has_edge(u, v));
                        assert_eq!(graph.has_edge(v, u), !$directed || graph.edges().contains(&Edge(v, u)));
                    }
                }
            }

            #[test]
            fn symmetry() {
                for graph in random_graphs() {
                    if !$directed {
                        assert!(graph.adjacency_matrix().is_symmetric());
                    }
                }
            }

            #[test]
            fn incidence_columns() {
                for graph in random_graphs() {
                    let incidence = graph.incidence_matrix();
                    assert_eq!(incidence.number_of_edges(), graph.number_of_edges());
                    assert_eq!(incidence.number_of_nodes(), graph.number_of_nodes());

                    for (i, &Edge(u, v)) in graph.edges().iter().enumerate() {
                        let w = graph.weight_of(u, v) as SignedWeight;
                        let head = if $directed { -w } else { w };

                        for (x, entry) in incidence.column(i as NumEdges).enumerate() {
                            let x = x as Node;
                            if x == v {
                                assert_eq!(entry, head);
                            } else if x == u {
                                assert_eq!(entry, w);
                            } else {
                                assert_eq!(entry, 0);
                            }
                        }
                    }
                }
            }

            #[test]
            fn lists_agree_with_matrix() {
                for graph in random_graphs() {
                    let m = graph.number_of_edges() as usize;
                    let loops = graph.edges().iter().filter(|e| e.is_loop()).count();
                    let expected = if $directed { m } else { 2 * m - loops };
                    assert_eq!(graph.adjacency_list().number_of_entries(), expected);

                    let copy = graph.adjacency_list().to_vecs();
                    assert_eq!(copy.len(), graph.len());
                    for u in graph.vertices() {
                        assert_eq!(copy[u as usize].as_slice(), graph.adjacency_list().of(u));
                    }

                    for (u, list) in graph.adjacency_list().iter() {
                        let listed = list.iter().map(|&(v, _)| v).sorted().dedup().collect_vec();
                        assert_eq!(listed, graph.neighbors_of(u).collect_vec());

                        if let Some(&(v, w)) = list.iter().rev().find(|&&(v, _)| graph.has_edge(u, v)) {
                            assert_eq!(w, graph.weight_of(u, v), "last entry of ({u},{v}) is current");
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
