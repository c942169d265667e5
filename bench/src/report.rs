//! Sampled statistics over a loaded graph: how far apart random users are,
//! and how the number of mutual friends falls off with distance.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use dos_graph_core::{connections_at_degree, mutual_friends, separation, Graph, VertexId};
use tracing::info;

use crate::config::ReportConfig;
use crate::rng::FastRng;

/// Users sampled for the connections-at-degree section.
const REACH_SOURCES: usize = 100;

/// Sampled pairs that share one degree of separation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegreeBucket {
    pub pairs: usize,
    pub total_mutual: usize,
}

impl DegreeBucket {
    pub fn mean_mutual(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            self.total_mutual as f64 / self.pairs as f64
        }
    }
}

#[derive(Debug)]
pub struct Report {
    pub samples: usize,
    pub unreachable: usize,
    pub by_degree: BTreeMap<usize, DegreeBucket>,
    /// Mean `connections_at_degree` size, per level.
    pub reach: Vec<(u32, f64)>,
    pub elapsed: Duration,
}

impl Report {
    pub fn reachable(&self) -> usize {
        self.samples - self.unreachable
    }

    pub fn mean_degree(&self) -> Option<f64> {
        let reachable = self.reachable();
        if reachable == 0 {
            return None;
        }
        let total: usize = self
            .by_degree
            .iter()
            .map(|(degree, bucket)| degree * bucket.pairs)
            .sum();
        Some(total as f64 / reachable as f64)
    }
}

/// Sample `config.samples` ordered pairs of distinct users and aggregate
/// their separation and mutual-friend counts.
pub fn run_report(graph: &Graph, config: &ReportConfig) -> Report {
    let start = Instant::now();

    // HashMap order is not stable across runs; sort so a seed is reproducible.
    let mut vertices: Vec<VertexId> = graph.vertices().collect();
    vertices.sort_unstable();

    let mut report = Report {
        samples: 0,
        unreachable: 0,
        by_degree: BTreeMap::new(),
        reach: Vec::new(),
        elapsed: Duration::ZERO,
    };

    if vertices.len() < 2 {
        report.elapsed = start.elapsed();
        return report;
    }

    let mut rng = FastRng::new(config.seed);
    let n = vertices.len() as u64;
    let mut sources = Vec::with_capacity(REACH_SOURCES.min(config.samples));

    for _ in 0..config.samples {
        let u = vertices[rng.next(n) as usize];
        let mut v = vertices[rng.next(n) as usize];
        while v == u {
            v = vertices[rng.next(n) as usize];
        }
        if sources.len() < REACH_SOURCES {
            sources.push(u);
        }

        report.samples += 1;
        match separation(graph, u, v) {
            Ok(Some(degree)) => {
                let bucket = report.by_degree.entry(degree).or_default();
                bucket.pairs += 1;
                bucket.total_mutual += mutual_friends(graph, u, v).len();
            }
            _ => report.unreachable += 1,
        }
    }

    if !sources.is_empty() {
        for level in 0..=config.max_degree {
            let total: usize = sources
                .iter()
                .map(|&user| connections_at_degree(graph, user, level).len())
                .sum();
            report.reach.push((level, total as f64 / sources.len() as f64));
        }
    }

    report.elapsed = start.elapsed();
    info!(
        samples = report.samples,
        unreachable = report.unreachable,
        elapsed_ms = report.elapsed.as_secs_f64() * 1000.0,
        "report finished"
    );
    report
}

pub fn print_report(report: &Report) {
    println!("Sampled pairs:   {}", report.samples);
    println!("Reachable pairs: {}", report.reachable());
    match report.mean_degree() {
        Some(mean) => println!("Mean degree of separation: {:.2}", mean),
        None => println!("Mean degree of separation: n/a (no reachable pairs)"),
    }

    println!();
    println!("{:>8} {:>10} {:>14}", "degree", "pairs", "mean mutual");
    println!("{:->8} {:->10} {:->14}", "", "", "");
    for (degree, bucket) in &report.by_degree {
        println!(
            "{:>8} {:>10} {:>14.3}",
            degree,
            bucket.pairs,
            bucket.mean_mutual()
        );
    }

    if !report.reach.is_empty() {
        println!();
        println!("{:>8} {:>16}", "level", "mean reached");
        println!("{:->8} {:->16}", "", "");
        for (level, mean) in &report.reach {
            println!("{:>8} {:>16.1}", level, mean);
        }
    }

    println!();
    println!("Completed in {:.1}ms", report.elapsed.as_secs_f64() * 1000.0);
}
