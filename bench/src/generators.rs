//! Synthetic social graph generators, all O(n + edges), single-threaded and
//! deterministic.

use clap::ValueEnum;
use dos_graph_core::Graph;

use crate::rng::FastRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Topology {
    /// Run every generator
    All,
    /// Erdos-Renyi uniform random follows
    Random,
    /// Watts-Strogatz ring lattice + shortcuts
    SmallWorld,
    /// Preferential attachment (celebrity hubs)
    ScaleFree,
}

impl Topology {
    /// Generators selected by this topology, with display names.
    pub fn generators(self) -> Vec<(&'static str, fn(u64) -> Graph)> {
        match self {
            Topology::Random => vec![("Erdos-Renyi random", gen_random)],
            Topology::SmallWorld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
            Topology::ScaleFree => vec![("Scale-free (edge sampling)", gen_scale_free)],
            Topology::All => vec![
                ("Erdos-Renyi random", gen_random as fn(u64) -> Graph),
                ("Small-world (Watts-Strogatz)", gen_small_world),
                ("Scale-free (edge sampling)", gen_scale_free),
            ],
        }
    }
}

/// Uniform random follows, ~10 per user on average.
pub fn gen_random(vertex_count: u64) -> Graph {
    let target_edges = vertex_count * 10;
    let mut graph = Graph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..vertex_count {
        graph.add_vertex(i);
    }

    for _ in 0..target_edges {
        let from = rng.next(vertex_count);
        let to = rng.next(vertex_count);
        if from != to {
            graph.add_edge(from, to);
        }
    }

    graph
}

/// Ring lattice where each user follows its K clockwise neighbors, with each
/// follow rewired to a random user with probability p. High clustering, short
/// paths.
pub fn gen_small_world(vertex_count: u64) -> Graph {
    let k = 10u64;
    let p = 0.05f64;
    let mut graph = Graph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        graph.add_vertex(i);
    }

    for i in 0..vertex_count {
        for j in 1..=k {
            let neighbor = (i + j) % vertex_count;
            if rng.next_f64() < p {
                let rewired = rng.next(vertex_count);
                graph.add_edge(i, if rewired != i { rewired } else { neighbor });
            } else {
                graph.add_edge(i, neighbor);
            }
        }
    }

    graph
}

/// Preferential attachment by sampling a random endpoint of an existing
/// follow: users with more follows are more likely to gain new ones.
pub fn gen_scale_free(vertex_count: u64) -> Graph {
    let edges_per_vertex = 10u64;
    let seed = 5u64.min(vertex_count);
    let mut graph = Graph::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<u64> = Vec::with_capacity((vertex_count * edges_per_vertex * 2) as usize);

    // Seed clique, followed in both directions
    for i in 0..seed {
        graph.add_vertex(i);
        for j in 0..i {
            graph.add_edge(i, j);
            graph.add_edge(j, i);
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_vertex in seed..vertex_count {
        graph.add_vertex(new_vertex);
        if endpoints.is_empty() {
            continue;
        }

        for _ in 0..edges_per_vertex.min(new_vertex) {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_vertex {
                graph.add_edge(new_vertex, target);
                endpoints.push(new_vertex);
                endpoints.push(target);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_fill_vertex_range() {
        for (name, generator) in Topology::All.generators() {
            let g = generator(500);
            assert_eq!(g.vertex_count(), 500, "{}", name);
            assert!(g.edge_count() > 0, "{}", name);
        }
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(gen_random(200), gen_random(200));
        assert_eq!(gen_scale_free(200), gen_scale_free(200));
    }

    #[test]
    fn test_small_world_out_degree_bounded() {
        let g = gen_small_world(300);
        assert!(g.vertices().all(|v| g.out_degree(v).unwrap() <= 10));
    }

    #[test]
    fn test_scale_free_tiny_graph() {
        let g = gen_scale_free(2);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 2);
    }
}
