//! # Version Control
//!
//! Thin wrapper around the `git` executable. The only query is a dated
//! `git log`; its output is returned as raw `hash|date|author|subject`
//! lines for the domain layer to parse.
//!
//! `git` must be on `PATH`. Each call spawns one process and waits for it.

mod history;

pub use history::{get_commit_history, HistoryError, LOG_FORMAT};
