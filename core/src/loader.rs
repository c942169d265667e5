use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::error::LoadError;
use crate::graph::{Graph, VertexId};

/// Limits applied while loading an edge list.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Reject graphs whose estimated footprint exceeds this many megabytes.
    pub max_memory_mb: Option<usize>,
}

/// Parse an in-memory edge list. See [`read_edge_list`] for the format.
pub fn parse_edge_list(input: &str, options: &LoadOptions) -> Result<Graph, LoadError> {
    read_edge_list(input.as_bytes(), options)
}

/// Open `path` and read it as an edge list.
pub fn load_edge_list(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Graph, LoadError> {
    let file = File::open(path.as_ref())?;
    read_edge_list(BufReader::new(file), options)
}

/// Read whitespace-separated vertex IDs, pairing consecutive IDs into
/// directed `(from, to)` edges. Pairs may span line breaks. Blank lines and
/// lines starting with `#` are skipped.
pub fn read_edge_list<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Graph, LoadError> {
    let start = Instant::now();
    let mut graph = Graph::new();
    // (vertex, line) of a `from` still waiting for its `to`
    let mut pending: Option<(VertexId, usize)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            let vertex: VertexId = token.parse().map_err(|_| LoadError::InvalidVertex {
                line: line_no,
                token: token.to_string(),
            })?;

            match pending.take() {
                Some((from, _)) => {
                    graph.add_edge(from, vertex);
                }
                None => pending = Some((vertex, line_no)),
            }
        }
    }

    if let Some((vertex, line)) = pending {
        return Err(LoadError::UnpairedVertex { line, vertex });
    }

    if let Some(max_mb) = options.max_memory_mb {
        let used_mb = graph.memory_usage() / (1024 * 1024);
        if used_mb > max_mb {
            return Err(LoadError::MemoryLimit { used_mb, max_mb });
        }
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "edge list loaded"
    );

    Ok(graph)
}
