//! dos-graph-bench: load or generate a social graph and query it.

mod config;
mod generators;
mod report;
mod rng;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dos_graph_core::{
    connections_at_degree, load_edge_list, mutual_friends, second_degree_mutual_friends,
    shortest_path, Graph, NeighborSet, VertexId,
};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::BenchConfig;
use crate::generators::Topology;

#[derive(Parser)]
#[command(name = "dos-graph-bench")]
#[command(about = "Degrees of separation and mutual friends over a social graph", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "dos-graph.toml")]
    config: PathBuf,

    /// Edge-list file (overrides graph.edges from the config)
    #[arg(short, long)]
    edges: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex/edge counts and memory estimate
    Stats,

    /// Shortest path and degree of separation between two users
    Path { from: VertexId, to: VertexId },

    /// Direct connections of a user
    Neighbors { user: VertexId },

    /// Friends shared by two users
    Mutual { user1: VertexId, user2: VertexId },

    /// Mutual friends between a user and each friend of a first-degree connection
    SecondDegree { user: VertexId, via: VertexId },

    /// Users reached after DEGREE further hops past the direct connections
    Connections { user: VertexId, degree: u32 },

    /// Sample random pairs and summarize separation and mutual friends
    Report {
        /// Number of sampled pairs (overrides report.samples)
        #[arg(long)]
        samples: Option<usize>,

        /// RNG seed (overrides report.seed)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Time traversal over generated graphs
    Bench {
        #[arg(value_enum, default_value = "all")]
        topology: Topology,

        #[arg(default_value_t = 100_000)]
        vertex_count: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BenchConfig::load(&cli.config)?;
    init_tracing(&config.logging.filter);

    let load = || load_graph(cli.edges.as_ref(), &config);

    match cli.command {
        Commands::Bench {
            topology,
            vertex_count,
        } => {
            if vertex_count < 2 {
                bail!("vertex_count must be at least 2, got {}", vertex_count);
            }
            for (name, generator) in topology.generators() {
                run_benchmark(name, generator, vertex_count);
            }
        }
        Commands::Stats => {
            let graph = load()?;
            println!("Vertices: {}", graph.vertex_count());
            println!("Edges:    {}", graph.edge_count());
            println!(
                "Memory:   ~{:.1}MB",
                graph.memory_usage() as f64 / 1_048_576.0
            );
        }
        Commands::Path { from, to } => match shortest_path(&load()?, from, to)? {
            Some(path) => {
                let hops: Vec<String> = path.vertices().iter().map(|v| v.to_string()).collect();
                println!("{}", hops.join(" --> "));
                println!("Degrees of separation: {}", path.degree());
            }
            None => println!("No path possible from {} to {}", from, to),
        },
        Commands::Neighbors { user } => {
            let graph = load()?;
            let neighbors = graph.neighbors(user)?;
            println!("Connections for user {}: {}", user, format_set(neighbors));
        }
        Commands::Mutual { user1, user2 } => {
            let mutual = mutual_friends(&load()?, user1, user2);
            println!(
                "Mutual connections for users {} & {}: {}",
                user1,
                user2,
                format_set(&mutual)
            );
        }
        Commands::SecondDegree { user, via } => {
            let overlap = second_degree_mutual_friends(&load()?, user, via);
            let mut friends: Vec<VertexId> = overlap.keys().copied().collect();
            friends.sort_unstable();
            for friend in friends {
                println!("{}: {}", friend, format_set(&overlap[&friend]));
            }
        }
        Commands::Connections { user, degree } => {
            let connections = connections_at_degree(&load()?, user, degree);
            println!(
                "There are {} degree-{} connections for user {}",
                connections.len(),
                degree,
                user
            );
            println!("{}", format_set(&connections));
        }
        Commands::Report { samples, seed } => {
            let mut report_config = config.report.clone();
            if let Some(samples) = samples {
                report_config.samples = samples;
            }
            if let Some(seed) = seed {
                report_config.seed = seed;
            }
            let report = report::run_report(&load()?, &report_config);
            report::print_report(&report);
        }
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn load_graph(edges: Option<&PathBuf>, config: &BenchConfig) -> anyhow::Result<Graph> {
    let Some(path) = edges.or(config.graph.edges.as_ref()) else {
        bail!("no edge list given: pass --edges or set graph.edges in the config");
    };
    load_edge_list(path, &config.load_options())
        .with_context(|| format!("loading edge list {}", path.display()))
}

/// Render a set in ascending order: `{1, 4, 9}`.
fn format_set(set: &NeighborSet) -> String {
    let mut ids: Vec<VertexId> = set.iter().copied().collect();
    ids.sort_unstable();
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("{{{}}}", ids.join(", "))
}

fn run_benchmark(name: &str, generator: fn(u64) -> Graph, vertex_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} users", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count);
    println!(
        "Generated in {:.2}s: {} users, {} follows, ~{:.0}MB",
        t.elapsed().as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    println!();
    println!("{:>8} {:>12} {:>10}", "degree", "reached", "time");
    println!("{:->8} {:->12} {:->10}", "", "", "");

    for degree in [0, 1, 2, 3, 5] {
        let t = Instant::now();
        let reached = connections_at_degree(&graph, 0, degree);
        println!(
            "{:>8} {:>12} {:>8.1}ms",
            degree,
            reached.len(),
            t.elapsed().as_secs_f64() * 1000.0
        );
        // Past this point every level covers the whole graph
        if reached.len() as u64 >= vertex_count - 1 {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    let far = vertex_count - 1;
    println!();
    let t = Instant::now();
    match shortest_path(&graph, 0, far) {
        Ok(Some(path)) => println!(
            "Shortest path 0 → {}: {} hops in {:.1}ms",
            far,
            path.degree(),
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Ok(None) => println!(
            "Shortest path 0 → {}: no path ({:.1}ms)",
            far,
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Err(err) => println!("Shortest path 0 → {}: {}", far, err),
    }

    let t = Instant::now();
    let shared: usize = (1..far.min(1000))
        .map(|other| mutual_friends(&graph, 0, other).len())
        .sum();
    println!(
        "Mutual friends of 0 with users 1..{}: {} shared in {:.1}ms",
        far.min(1000),
        shared,
        t.elapsed().as_secs_f64() * 1000.0
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_set_sorted() {
        let set: NeighborSet = [9, 1, 4].into_iter().collect();
        assert_eq!(format_set(&set), "{1, 4, 9}");
        assert_eq!(format_set(&NeighborSet::new()), "{}");
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["dos-graph-bench", "--edges", "g.txt", "path", "103", "887"])
            .unwrap();
        assert_eq!(cli.edges, Some(PathBuf::from("g.txt")));
        assert!(matches!(cli.command, Commands::Path { from: 103, to: 887 }));

        let cli = Cli::try_parse_from(["dos-graph-bench", "bench", "small-world", "500"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Bench {
                topology: Topology::SmallWorld,
                vertex_count: 500
            }
        ));
    }

    #[test]
    fn test_load_graph_requires_source() {
        let config = BenchConfig::default();
        assert!(load_graph(None, &config).is_err());
    }
}
