//! Commit chain graph
//!
//! Holds commits as a straight chain in a petgraph `DiGraph` and renders it
//! as a Mermaid `graph TD` description. Each commit links to the one that
//! follows it in the history; merges and branches are not modeled.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::commit::{CommitHistory, CommitRecord, RecordError};

/// First line of every rendered document
pub const GRAPH_HEADER: &str = "graph TD";

/// Indentation of node and edge lines
const INDENT: &str = "    ";

/// Line break markup inside node labels
const LABEL_BREAK: &str = "<br>";

/// A linear graph of commits in history order
#[derive(Debug, Default)]
pub struct CommitGraph {
    graph: DiGraph<CommitRecord, ()>,
}

impl CommitGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    /// Builds the chain from a history, one node per record
    ///
    /// Node indices follow history order; every node after the first gets
    /// an edge from its predecessor.
    pub fn from_history(history: &CommitHistory) -> Self {
        let mut graph = Self::new();
        let mut prev: Option<NodeIndex> = None;

        for record in history.records() {
            let idx = graph.graph.add_node(record.clone());
            if let Some(prev_idx) = prev {
                graph.graph.add_edge(prev_idx, idx, ());
            }
            prev = Some(idx);
        }

        graph
    }

    /// Renders the Mermaid description
    ///
    /// Each node line is followed by the edge from its predecessor, if any.
    /// Lines are joined with `\n` and there is no trailing newline.
    pub fn render(&self) -> String {
        let mut lines = vec![GRAPH_HEADER.to_string()];

        for idx in self.graph.node_indices() {
            let record = &self.graph[idx];
            lines.push(format!("{}{}", INDENT, node_line(record)));

            for edge in self.graph.edges_directed(idx, Direction::Incoming) {
                let prev = &self.graph[edge.source()];
                lines.push(format!("{}{} --> {}", INDENT, prev.short_id(), record.short_id()));
            }
        }

        lines.join("\n")
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

/// `<id>(<id>[<date><br><author><br><message>])`
fn node_line(record: &CommitRecord) -> String {
    let id = record.short_id();
    let label = [
        record.timestamp.as_str(),
        record.author.as_str(),
        record.message.as_str(),
    ]
    .join(LABEL_BREAK);

    format!("{}({}[{}])", id, id, label)
}

/// Parses raw `git log` records and renders them as a Mermaid chain
///
/// Callers must not pass an empty slice; an empty input renders the header
/// alone.
pub fn build_dependency_graph<S: AsRef<str>>(commits: &[S]) -> Result<String, RecordError> {
    let history = CommitHistory::from_lines(commits)?;
    Ok(CommitGraph::from_history(&history).render())
}
