//! Demo driver: generates random graphs, prints their representations and compares BFS and DFS
//! paths between a random pair of vertices.

use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use matgraphs::{algo::*, error::Result, gens::*, io::*, prelude::*};

#[derive(Parser)]
#[command(
    name = "mgdemo",
    about = "Generates random weighted graphs and searches paths with BFS and DFS"
)]
struct Cli {
    /// Number of graphs to generate
    #[arg(long, default_value = "10")]
    graphs: u32,

    /// Minimum number of vertices per graph
    #[arg(long, default_value = "10")]
    min_vertices: NumNodes,

    /// Maximum number of vertices per graph
    #[arg(long, default_value = "10")]
    max_vertices: NumNodes,

    /// Minimum number of edges per graph
    #[arg(long, default_value = "10")]
    min_edges: NumEdges,

    /// Maximum number of edges per graph
    #[arg(long, default_value = "10")]
    max_edges: NumEdges,

    /// Cap on the number of edges incident to a vertex
    #[arg(long)]
    max_degree: Option<NumNodes>,

    /// Generate directed graphs
    #[arg(long)]
    directed: bool,

    /// Cap on the number of edges entering a vertex (directed only)
    #[arg(long)]
    max_incoming: Option<NumNodes>,

    /// Cap on the number of edges leaving a vertex (directed only)
    #[arg(long)]
    max_outgoing: Option<NumNodes>,

    /// Seed of the random number generator; drawn at random if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Print weights instead of 0/1 grids
    #[arg(long)]
    weights: bool,

    /// Only append undirected edges to the adjacency list of their first endpoint
    #[arg(long)]
    one_sided_lists: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn generator(&self) -> RandomGraphGen {
        RandomGraphGen::new()
            .nodes(self.min_vertices..=self.max_vertices)
            .edges(self.min_edges..=self.max_edges)
            .directed(self.directed)
            .max_degree(self.max_degree)
            .max_incoming(self.max_incoming)
            .max_outgoing(self.max_outgoing)
            .options(GraphOptions::new().mirror_undirected_edges(!self.one_sided_lists))
    }

    fn report_writer(&self) -> ReportWriter {
        let style = if self.weights {
            MatrixStyle::Weights
        } else {
            MatrixStyle::Presence
        };
        ReportWriter::new().style(style)
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Runs one search, prints its path and elapsed time
fn write_search<W, F>(out: &mut W, name: &str, source: Node, target: Node, search: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<Vec<Node>>,
{
    let start = Instant::now();
    let path = search()?;
    let elapsed = start.elapsed().as_secs_f64();

    write!(out, "{name} shortest path from vertex {source} to vertex {target}: ")?;
    if path.is_empty() {
        writeln!(out, "Path does not exist")?;
    } else {
        for u in &path {
            write!(out, "{u} ")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{name} shortest path time: {elapsed} seconds")?;

    Ok(())
}

fn write_trial<W, R>(
    out: &mut W,
    writer: &ReportWriter,
    index: u32,
    graph: &Graph,
    rng: &mut R,
) -> Result<()>
where
    W: Write,
    R: Rng,
{
    writeln!(out, "Adjacency matrix:")?;
    writer.write_adjacency_matrix(out, graph)?;

    writeln!(out, "Incidence matrix:")?;
    writer.write_incidence_matrix(out, graph)?;

    writeln!(out, "Adjacency list:")?;
    writer.write_adjacency_list(out, graph)?;

    let n = graph.number_of_nodes();
    writeln!(
        out,
        "Graph {index} with {n} vertices and {} edges",
        graph.number_of_edges()
    )?;

    let source = rng.random_range(0..n);
    let target = rng.random_range(0..n);

    write_search(out, "BFS", source, target, || {
        graph.bfs_shortest_path(source, target)
    })?;
    write_search(out, "DFS", source, target, || {
        let path = graph.dfs_shortest_path(source, target)?;
        debug!("DFS path weight {:?}", graph.path_weight(&path));
        Ok(path)
    })?;

    writeln!(out, "\n")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let seed = match cli.seed {
        Some(seed) => {
            info!("Seed {seed}");
            seed
        }
        None => {
            let seed = rand::random();
            warn!("Using random seed {seed}; pass --seed {seed} to reproduce this run");
            seed
        }
    };

    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let generator = cli.generator();
    let writer = cli.report_writer();

    let mut out = BufWriter::new(io::stdout().lock());
    for index in 1..=cli.graphs {
        let (graph, stats) = generator.generate_with_stats(&mut rng)?;
        debug!("Graph {index}: {stats:?}");

        write_trial(&mut out, &writer, index, &graph, &mut rng)?;
    }
    out.flush()?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
