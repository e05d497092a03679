//! # Storage Layer
//!
//! File I/O for commit-graph.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | path given on the command line |
//! | Graph | Mermaid text | `output_path` from the config |
//!
//! The output file is created or truncated on every run. There is no
//! locking; concurrent runs writing the same path leave the last write.

mod config;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use config::{Config, ConfigError};

/// Writes the rendered graph, replacing any existing file
pub fn write_graph(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document)
        .with_context(|| format!("Failed to write graph to {}", path.display()))
}
