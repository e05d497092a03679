//! Run configuration
//!
//! Read once from a TOML file given on the command line:
//!
//! ```toml
//! repo_path = "/path/to/repo"
//! output_path = "graph.mmd"
//! since_date = "2024-01-01"
//! ```
//!
//! All three keys are required and must be non-empty. Unknown keys are
//! ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration. Ensure 'repo_path', 'output_path', and 'since_date' are specified.")]
    MissingFields,

    #[error("Invalid repository path: {0}")]
    InvalidRepoPath(String),
}

impl ConfigError {
    /// True for errors raised while reading or parsing the file
    pub fn is_load_error(&self) -> bool {
        matches!(self, ConfigError::Read { .. } | ConfigError::Parse(_))
    }
}

/// Configuration as written in the file, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    repo_path: Option<String>,
    output_path: Option<String>,
    since_date: Option<String>,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Existing directory holding the repository
    pub repo_path: PathBuf,

    /// Destination of the rendered graph, overwritten each run
    pub output_path: PathBuf,

    /// Date filter passed verbatim to `git log --since`
    pub since_date: String,
}

impl Config {
    /// Loads and validates a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Parses and validates TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(describe_toml_error(content, &e)))?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let (repo_path, output_path, since_date) =
            match (non_empty(raw.repo_path), non_empty(raw.output_path), non_empty(raw.since_date)) {
                (Some(repo), Some(output), Some(since)) => (repo, output, since),
                _ => return Err(ConfigError::MissingFields),
            };

        if !Path::new(&repo_path).is_dir() {
            return Err(ConfigError::InvalidRepoPath(repo_path));
        }

        Ok(Self {
            repo_path: PathBuf::from(repo_path),
            output_path: PathBuf::from(output_path),
            since_date,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One-line description of a TOML error: `<message> at line L, column C`
fn describe_toml_error(content: &str, err: &toml::de::Error) -> String {
    let message = err
        .message()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ");

    match err.span() {
        Some(span) => {
            let before = content.get(..span.start).unwrap_or(content);
            let line = before.matches('\n').count() + 1;
            let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
            format!("{} at line {}, column {}", message, line, column)
        }
        None => message,
    }
}
