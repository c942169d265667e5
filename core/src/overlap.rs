use std::collections::HashMap;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::{Graph, NeighborSet, VertexId};

/// Mutual-friend overlap for each neighbor of a first-degree connection.
pub type SecondDegreeOverlap = HashMap<VertexId, NeighborSet>;

/// Intersection of the neighbor sets of `user1` and `user2`.
pub fn try_mutual_friends(
    graph: &Graph,
    user1: VertexId,
    user2: VertexId,
) -> Result<NeighborSet, GraphError> {
    let a = graph.neighbors(user1)?;
    let b = graph.neighbors(user2)?;

    // Probe the larger set while iterating the smaller one.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    Ok(small
        .iter()
        .filter(|id| large.contains(*id))
        .copied()
        .collect())
}

/// Graceful form of [`try_mutual_friends`]: unknown users share no friends.
pub fn mutual_friends(graph: &Graph, user1: VertexId, user2: VertexId) -> NeighborSet {
    try_mutual_friends(graph, user1, user2).unwrap_or_else(|err| {
        debug!(user1, user2, %err, "mutual friends on unknown user");
        NeighborSet::new()
    })
}

/// For every neighbor `f` of `first_degree`, the friends `user` shares with
/// `f`, keyed by `f`.
pub fn try_second_degree_mutual_friends(
    graph: &Graph,
    user: VertexId,
    first_degree: VertexId,
) -> Result<SecondDegreeOverlap, GraphError> {
    graph.neighbors(user)?;
    let friends_of_friend = graph.neighbors(first_degree)?;

    let mut overlap = SecondDegreeOverlap::with_capacity(friends_of_friend.len());
    for &friend in friends_of_friend {
        overlap.insert(friend, try_mutual_friends(graph, user, friend)?);
    }
    Ok(overlap)
}

/// Graceful form of [`try_second_degree_mutual_friends`]: unknown users
/// yield an empty mapping.
pub fn second_degree_mutual_friends(
    graph: &Graph,
    user: VertexId,
    first_degree: VertexId,
) -> SecondDegreeOverlap {
    try_second_degree_mutual_friends(graph, user, first_degree).unwrap_or_else(|err| {
        debug!(user, first_degree, %err, "second-degree overlap on unknown user");
        SecondDegreeOverlap::new()
    })
}
