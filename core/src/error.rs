use std::io;

use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised by graph queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {0} does not exist in the graph")]
    UnknownVertex(VertexId),
}

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: '{token}' is not a vertex id")]
    InvalidVertex { line: usize, token: String },

    #[error("line {line}: vertex {vertex} has no edge partner")]
    UnpairedVertex { line: usize, vertex: VertexId },

    #[error("loaded graph uses {used_mb}MB, exceeds max_memory_mb={max_mb}MB")]
    MemoryLimit { used_mb: usize, max_mb: usize },
}
