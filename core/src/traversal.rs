use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::{Graph, NeighborSet, VertexId};

/// A directed path from a source to a target, both endpoints included.
///
/// Never empty: the trivial path from a vertex to itself holds one vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn target(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Degree of separation: number of edges on the path.
    pub fn degree(&self) -> usize {
        self.vertices.len() - 1
    }

    /// True for the zero-length path from a vertex to itself.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }

    /// Consecutive `(from, to)` edges along the path.
    pub fn hops(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }
}

/// Shortest directed path from `source` to `target` using BFS (unweighted).
///
/// Both endpoints are validated before any traversal work. Returns
/// `Ok(None)` when `target` is unreachable, and the trivial one-vertex path
/// when `source == target`. The search stops as soon as `target` is
/// discovered among the neighbors of the vertex being expanded.
pub fn shortest_path(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Path>, GraphError> {
    graph.neighbors(source)?;
    graph.neighbors(target)?;

    if source == target {
        return Ok(Some(Path {
            vertices: vec![source],
        }));
    }

    // child → parent. Sentinel: the source is its own parent.
    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    parents.insert(source, source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors(current)? {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, current);

            if next == target {
                trace!(source, target, visited = parents.len(), "path found");
                return Ok(Some(reconstruct_path(&parents, source, target)));
            }

            queue.push_back(next);
        }
    }

    trace!(source, target, visited = parents.len(), "target unreachable");
    Ok(None)
}

/// Walk parent links from `target` back to `source`.
fn reconstruct_path(
    parents: &HashMap<VertexId, VertexId>,
    source: VertexId,
    target: VertexId,
) -> Path {
    let mut vertices = vec![target];
    let mut current = target;

    while current != source {
        current = parents[&current];
        vertices.push(current);
    }

    vertices.reverse();
    Path { vertices }
}

/// Strict degree of separation: `Ok(None)` when no path exists.
pub fn separation(
    graph: &Graph,
    user1: VertexId,
    user2: VertexId,
) -> Result<Option<usize>, GraphError> {
    Ok(shortest_path(graph, user1, user2)?.map(|path| path.degree()))
}

/// Number of edges on the shortest path from `user1` to `user2`.
///
/// Returns 0 when either user is unknown, when no path exists, and for
/// `user1 == user2`. Use [`separation`] or [`shortest_path`] to tell these
/// cases apart.
pub fn degree_of_separation(graph: &Graph, user1: VertexId, user2: VertexId) -> usize {
    match separation(graph, user1, user2) {
        Ok(Some(degree)) => degree,
        Ok(None) => {
            debug!(user1, user2, "no path between users");
            0
        }
        Err(err) => {
            debug!(user1, user2, %err, "degree of separation on unknown user");
            0
        }
    }
}

/// Vertices reached from `user` after `degree` further hops past its direct
/// neighbors.
///
/// Level 0 is `neighbors(user)`. Each following level is built from the whole
/// previous frontier; `user` itself is never re-entered, but vertices seen at
/// an earlier level may appear again. Expansion stops early once a frontier
/// is empty.
pub fn try_connections_at_degree(
    graph: &Graph,
    user: VertexId,
    degree: u32,
) -> Result<NeighborSet, GraphError> {
    let mut frontier = graph.neighbors(user)?.clone();

    for level in 0..degree {
        if frontier.is_empty() {
            trace!(user, level, "frontier exhausted");
            break;
        }
        frontier = expand_frontier(graph, &frontier, user);
    }

    Ok(frontier)
}

/// Graceful form of [`try_connections_at_degree`]: unknown users yield an
/// empty set.
pub fn connections_at_degree(graph: &Graph, user: VertexId, degree: u32) -> NeighborSet {
    try_connections_at_degree(graph, user, degree).unwrap_or_else(|err| {
        debug!(user, degree, %err, "connections requested for unknown user");
        NeighborSet::new()
    })
}

fn expand_frontier(graph: &Graph, frontier: &NeighborSet, user: VertexId) -> NeighborSet {
    let mut next = NeighborSet::with_capacity(frontier.len());
    for &vertex in frontier {
        if let Ok(neighbors) = graph.neighbors(vertex) {
            next.extend(neighbors.iter().copied().filter(|&id| id != user));
        }
    }
    next
}
