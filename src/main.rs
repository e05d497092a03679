//! commit-graph - render recent commit history as a Mermaid graph

use std::process::ExitCode;

fn main() -> ExitCode {
    commit_graph::cli::run()
}
