//! commit-graph - render a repository's recent commit history as a Mermaid graph
//!
//! Reads a TOML config naming a repository, an output file and a cutoff
//! date, lists the commits since that date with `git log`, and writes them
//! as a single chain in `graph TD` syntax.

pub mod domain;
pub mod storage;
pub mod vcs;
pub mod cli;

pub use domain::{build_dependency_graph, CommitGraph, CommitHistory, CommitRecord};
pub use storage::Config;
pub use vcs::get_commit_history;
