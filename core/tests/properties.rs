//! Property-based checks of traversal and overlap invariants over small
//! random directed graphs.

use std::collections::{HashMap, VecDeque};

use dos_graph_core::{
    connections_at_degree, degree_of_separation, mutual_friends, shortest_path, Graph, GraphError,
    NeighborSet, VertexId,
};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const MAX_VERTEX: VertexId = 16;
const UNKNOWN: VertexId = 1_000;

fn graph_strategy() -> impl Strategy<Value = Graph> {
    vec((0..MAX_VERTEX, 0..MAX_VERTEX), 0..64).prop_map(|edges| {
        let mut g = Graph::new();
        g.load_edges(edges);
        g
    })
}

/// Hop distances from `source`, computed level by level without parent links.
fn reference_distances(graph: &Graph, source: VertexId) -> HashMap<VertexId, usize> {
    let mut dist = HashMap::from([(source, 0)]);
    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for &next in graph.neighbors(current).unwrap() {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn shortest_paths_are_valid_and_minimal(g in graph_strategy()) {
        let vertices: Vec<VertexId> = g.vertices().collect();
        for &u in &vertices {
            let dist = reference_distances(&g, u);
            for &v in &vertices {
                match shortest_path(&g, u, v).unwrap() {
                    Some(path) => {
                        prop_assert_eq!(path.source(), u);
                        prop_assert_eq!(path.target(), v);
                        prop_assert!(path.hops().all(|(a, b)| g.has_edge(a, b)));
                        prop_assert_eq!(Some(&path.degree()), dist.get(&v));
                        prop_assert_eq!(degree_of_separation(&g, u, v), path.degree());
                    }
                    None => prop_assert!(!dist.contains_key(&v)),
                }
            }
        }
    }

    #[test]
    fn mutual_friends_is_symmetric_intersection(g in graph_strategy()) {
        let vertices: Vec<VertexId> = g.vertices().collect();
        for &u in &vertices {
            for &v in &vertices {
                let mutual = mutual_friends(&g, u, v);
                prop_assert_eq!(&mutual, &mutual_friends(&g, v, u));

                let expected: NeighborSet = g
                    .neighbors(u)
                    .unwrap()
                    .intersection(g.neighbors(v).unwrap())
                    .copied()
                    .collect();
                prop_assert_eq!(mutual, expected);
            }
        }
    }

    #[test]
    fn degree_zero_connections_are_neighbors(g in graph_strategy()) {
        for u in g.vertices() {
            prop_assert_eq!(&connections_at_degree(&g, u, 0), g.neighbors(u).unwrap());
        }
    }

    #[test]
    fn connections_never_include_user_past_degree_zero(
        g in graph_strategy(),
        degree in 1u32..5,
    ) {
        for u in g.vertices() {
            prop_assert!(!connections_at_degree(&g, u, degree).contains(&u));
        }
    }

    #[test]
    fn unknown_users_degrade_gracefully(g in graph_strategy(), u in 0..MAX_VERTEX) {
        prop_assert_eq!(
            shortest_path(&g, UNKNOWN, u).unwrap_err(),
            GraphError::UnknownVertex(UNKNOWN)
        );
        prop_assert_eq!(degree_of_separation(&g, u, UNKNOWN), 0);
        prop_assert!(mutual_friends(&g, u, UNKNOWN).is_empty());
        prop_assert!(connections_at_degree(&g, UNKNOWN, 2).is_empty());
    }
}
