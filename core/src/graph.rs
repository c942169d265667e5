use std::collections::{HashMap, HashSet};

use crate::error::GraphError;

/// User identifier as it appears in edge lists.
pub type VertexId = u64;

/// Direct connections of a single vertex.
pub type NeighborSet = HashSet<VertexId>;

/// In-memory directed social graph: vertex → set of outgoing neighbors.
///
/// An edge `a → b` does not imply `b → a`. Every neighbor referenced by an
/// edge is also present as a vertex key; `add_edge` creates missing endpoints.
/// The store is built once by a loader and then only read by the traversal
/// and overlap operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<VertexId, NeighborSet>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertex_count),
        }
    }

    /// Build a graph from an existing adjacency map.
    ///
    /// Neighbors that are not keys of `adjacency` are added as vertices with
    /// no outgoing edges.
    pub fn from_adjacency(adjacency: HashMap<VertexId, NeighborSet>) -> Self {
        let dangling: Vec<VertexId> = adjacency
            .values()
            .flatten()
            .filter(|id| !adjacency.contains_key(*id))
            .copied()
            .collect();

        let mut graph = Self { adjacency };
        for id in dangling {
            graph.add_vertex(id);
        }
        graph
    }

    /// Insert a vertex with no neighbors. Re-adding an existing vertex is a
    /// no-op and keeps its neighbors.
    ///
    /// Returns `true` if the vertex was newly inserted.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, NeighborSet::new());
        true
    }

    /// Add a directed edge, creating either endpoint if absent.
    ///
    /// Returns `true` if the edge was not already present.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        self.add_vertex(to);
        self.adjacency.entry(from).or_default().insert(to)
    }

    /// Bulk insert `(from, to)` pairs.
    pub fn load_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }

    /// Outgoing neighbors of `id`.
    pub fn neighbors(&self, id: VertexId) -> Result<&NeighborSet, GraphError> {
        self.adjacency
            .get(&id)
            .ok_or(GraphError::UnknownVertex(id))
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|neighbors| neighbors.contains(&to))
    }

    /// Number of outgoing edges of `id`, or `None` for an unknown vertex.
    pub fn out_degree(&self, id: VertexId) -> Option<usize> {
        self.adjacency.get(&id).map(|n| n.len())
    }

    /// All vertex IDs, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All directed edges as `(from, to)` pairs, in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, neighbors)| neighbors.iter().map(move |&to| (from, to)))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum()
    }

    /// Read-only view of the underlying adjacency map.
    pub fn adjacency(&self) -> &HashMap<VertexId, NeighborSet> {
        &self.adjacency
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        // Per-entry overhead of a hash table slot (control byte + padding).
        const SLOT_OVERHEAD: usize = 8;

        let vertices_mem = self.adjacency.capacity()
            * (size_of::<VertexId>() + size_of::<NeighborSet>() + SLOT_OVERHEAD);
        let neighbors_mem: usize = self
            .adjacency
            .values()
            .map(|n| n.capacity() * (size_of::<VertexId>() + SLOT_OVERHEAD))
            .sum();

        vertices_mem + neighbors_mem
    }
}
