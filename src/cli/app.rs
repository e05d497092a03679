//! Main CLI application structure

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;

use super::output::{Output, OutputFormat};
use crate::domain::{CommitGraph, CommitHistory};
use crate::storage::{self, Config};
use crate::vcs;

/// Printed to stdout when the argument count is wrong
pub const USAGE: &str = "Usage: commit-graph <config-file-path>";

/// Printed when `git log` returns nothing
pub const NO_COMMITS_MESSAGE: &str = "No commits found after the specified date.";

#[derive(Parser)]
#[command(name = "commit-graph")]
#[command(author, version, about = "Render recent commit history as a Mermaid graph")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the TOML configuration file
    pub config: PathBuf,
}

/// Summary printed in JSON mode after a successful run
#[derive(Debug, Serialize)]
struct RunSummary {
    success: bool,
    output_path: String,
    commits: usize,
    nodes: usize,
    edges: usize,
    oldest: Option<String>,
    newest: Option<String>,
}

/// Main entry point for the CLI
///
/// Returns success when the graph was written or when there was nothing to
/// render. Every error is reported once and mapped to failure.
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(e),
    };
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("commit-graph starting");

    match generate(&output, &cli.config) {
        Ok(()) => {
            output.verbose("Command completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Handles argument errors; help and version requests still succeed
fn usage_exit(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            println!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}

/// Loads the config, reads history, renders and writes the graph
fn generate(output: &Output, config_path: &Path) -> Result<()> {
    output.verbose_ctx("config", &format!("Loading {}", config_path.display()));
    let config = Config::load(config_path).map_err(|e| {
        if e.is_load_error() {
            anyhow::Error::new(e).context("Could not load config file")
        } else {
            anyhow::Error::new(e)
        }
    })?;
    output.verbose_ctx(
        "config",
        &format!(
            "repo_path={}, output_path={}, since_date={}",
            config.repo_path.display(),
            config.output_path.display(),
            config.since_date
        ),
    );

    output.progress("Fetching commit history...");
    let lines = vcs::get_commit_history(&config.repo_path, &config.since_date)
        .context("Git command failed")?;
    output.verbose_ctx("git", &format!("git log returned {} records", lines.len()));

    if lines.is_empty() {
        if output.is_json() {
            output.data(&serde_json::json!({
                "success": true,
                "message": NO_COMMITS_MESSAGE,
                "commits": 0,
            }));
        } else {
            output.success(NO_COMMITS_MESSAGE);
        }
        return Ok(());
    }

    output.progress("Building dependency graph...");
    let history = CommitHistory::from_lines(&lines).context("Unexpected error")?;
    let graph = CommitGraph::from_history(&history);
    output.verbose_ctx(
        "graph",
        &format!("{} nodes, {} edges", graph.node_count(), graph.edge_count()),
    );

    output.progress("Writing graph to output file...");
    storage::write_graph(&config.output_path, &graph.render())?;

    if output.is_json() {
        output.data(&RunSummary {
            success: true,
            output_path: config.output_path.display().to_string(),
            commits: history.len(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            oldest: history.oldest().map(|t| t.to_rfc3339()),
            newest: history.newest().map(|t| t.to_rfc3339()),
        });
    } else {
        output.success("Dependency graph written successfully.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_positional() {
        let cli = Cli::try_parse_from(["commit-graph", "config.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_global_flags() {
        let cli = Cli::try_parse_from(["commit-graph", "-v", "--format", "json", "c.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(Cli::try_parse_from(["commit-graph"]).is_err());
        assert!(Cli::try_parse_from(["commit-graph", "a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn config_errors_propagate() {
        let output = Output::new(OutputFormat::Text, false);
        let dir = tempfile::TempDir::new().unwrap();
        let err = generate(&output, &dir.path().join("absent.toml")).unwrap_err();

        assert!(format!("{:#}", err).starts_with("Could not load config file: Failed to read"));
    }
}
