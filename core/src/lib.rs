//! dos-graph-core: In-memory social graph analytics.
//!
//! Holds a directed adjacency-set graph of integer user IDs and answers
//! relationship-distance queries over it: shortest-path degree of
//! separation, the users reached after N further hops, and mutual-friend
//! overlaps (direct and second-degree).
//!
//! The graph is populated once (directly or through the edge-list loader)
//! and then only read; every query keeps its working state local to the
//! call, so a loaded `Graph` can be shared behind `&` or an `Arc`.

mod error;
mod graph;
mod loader;
mod overlap;
mod traversal;

pub use error::{GraphError, LoadError};
pub use graph::{Graph, NeighborSet, VertexId};
pub use loader::{load_edge_list, parse_edge_list, read_edge_list, LoadOptions};
pub use overlap::{
    mutual_friends, second_degree_mutual_friends, try_mutual_friends,
    try_second_degree_mutual_friends, SecondDegreeOverlap,
};
pub use traversal::{
    connections_at_degree, degree_of_separation, separation, shortest_path,
    try_connections_at_degree, Path,
};
