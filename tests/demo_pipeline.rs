use std::process::Command;

use itertools::Itertools;
use matgraphs::{algo::*, gens::*, io::*, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

fn report(graph: &Graph, writer: &ReportWriter) -> String {
    let mut out = Vec::new();
    writer.write_adjacency_matrix(&mut out, graph).unwrap();
    writer.write_incidence_matrix(&mut out, graph).unwrap();
    writer.write_adjacency_list(&mut out, graph).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn generated_graphs_are_reported_and_searched() {
    let rng = &mut Pcg64Mcg::seed_from_u64(42);
    let writer = ReportWriter::new();

    for directed in [false, true] {
        let generator = RandomGraphGen::new().directed(directed);

        for _ in 0..10 {
            let graph = generator.generate(rng).unwrap();
            let n = graph.number_of_nodes();

            let text = report(&graph, &writer);
            let lines = text.lines().collect_vec();
            // header + n rows + blank, header + m rows + blank, n lists + blank
            assert_eq!(lines.len(), (n + 2) as usize + 12 + n as usize + 1);
            assert!(lines[0].starts_with("  V0 V1"));

            for _ in 0..10 {
                let s = rng.random_range(0..n);
                let t = rng.random_range(0..n);

                let bfs = graph.bfs_shortest_path(s, t).unwrap();
                let dfs = graph.dfs_shortest_path(s, t).unwrap();

                assert_eq!(bfs.is_empty(), dfs.is_empty());
                if !bfs.is_empty() {
                    assert!(graph.is_path(&bfs, s, t));
                    assert!(graph.is_path(&dfs, s, t));
                    assert!(bfs.len() <= dfs.len());
                    assert!(bfs.iter().all_unique());
                    assert!(dfs.iter().all_unique());
                }
            }
        }
    }
}

#[test]
fn demo_prints_every_trial() {
    let output = Command::new(env!("CARGO_BIN_EXE_mgdemo"))
        .args(["--graphs", "3", "--seed", "11"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    for i in 1..=3 {
        assert!(stdout.contains(&format!("Graph {i} with 10 vertices and 10 edges")));
    }
    assert_eq!(stdout.matches("Adjacency matrix:").count(), 3);
    assert_eq!(stdout.matches("Incidence matrix:").count(), 3);
    assert_eq!(stdout.matches("BFS shortest path time: ").count(), 3);
    assert_eq!(stdout.matches("DFS shortest path time: ").count(), 3);
}

#[test]
fn demo_is_reproducible_per_seed() {
    let run = || {
        let output = Command::new(env!("CARGO_BIN_EXE_mgdemo"))
            .args(["--graphs", "2", "--seed", "5", "--weights"])
            .output()
            .unwrap();
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .filter(|line| !line.contains(" time: "))
            .join("\n")
    };

    assert_eq!(run(), run());
}

#[test]
fn demo_reports_random_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_mgdemo"))
        .args(["--graphs", "1"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let seed = stderr
        .split("pass --seed ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .expect("seed is logged by default");
    assert!(seed.parse::<u64>().is_ok());
}

#[test]
fn demo_fails_on_infeasible_parameters() {
    let output = Command::new(env!("CARGO_BIN_EXE_mgdemo"))
        .args([
            "--min-vertices",
            "4",
            "--max-vertices",
            "4",
            "--min-edges",
            "7",
            "--max-edges",
            "7",
            "--seed",
            "1",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot generate 7 edges"));
}
