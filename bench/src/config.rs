use std::path::{Path, PathBuf};

use anyhow::Context;
use dos_graph_core::LoadOptions;
use serde::{Deserialize, Serialize};

/// Top-level configuration, read from `dos-graph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the social graph comes from and how large it may grow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Edge-list file loaded when `--edges` is not given.
    #[serde(default)]
    pub edges: Option<PathBuf>,
    /// Refuse to keep a loaded graph larger than this (MB).
    #[serde(default)]
    pub max_memory_mb: Option<usize>,
}

/// Sampling parameters for the `report` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Highest level measured by the connections-at-degree section.
    #[serde(default = "default_max_degree")]
    pub max_degree: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_samples() -> usize {
    1000
}

fn default_seed() -> u64 {
    42
}

fn default_max_degree() -> u32 {
    3
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            seed: default_seed(),
            max_degree: default_max_degree(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl BenchConfig {
    /// Load config from a TOML file. A missing file yields the defaults; a
    /// malformed one is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_memory_mb: self.graph.max_memory_mb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig::load(&dir.path().join("dos-graph.toml")).unwrap();
        assert_eq!(config.report.samples, 1000);
        assert_eq!(config.report.seed, 42);
        assert_eq!(config.logging.filter, "info");
        assert!(config.graph.edges.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[graph]\nedges = \"data/facebook_1000.txt\"\nmax_memory_mb = 256").unwrap();
        writeln!(file, "[report]\nsamples = 50").unwrap();
        file.flush().unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(
            config.graph.edges.as_deref(),
            Some(Path::new("data/facebook_1000.txt"))
        );
        assert_eq!(config.load_options().max_memory_mb, Some(256));
        assert_eq!(config.report.samples, 50);
        assert_eq!(config.report.max_degree, 3);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nsamples = \"many\"").unwrap();
        file.flush().unwrap();

        assert!(BenchConfig::load(file.path()).is_err());
    }
}
