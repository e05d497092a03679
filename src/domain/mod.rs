//! Domain models for commit-graph
//!
//! Commit records and the chain graph, without any I/O concerns.

mod commit;
mod graph;

pub use commit::{CommitHistory, CommitRecord, RecordError, SHORT_ID_LEN};
pub use graph::{build_dependency_graph, CommitGraph, GRAPH_HEADER};
