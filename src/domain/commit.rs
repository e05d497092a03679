//! Commit records parsed from `git log` output
//!
//! Each record is one line of the form `hash|date|author|subject`. The line
//! is split into at most four parts, so a `|` inside the subject stays part
//! of the message.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Separator between fields in a raw record
pub const FIELD_SEPARATOR: char = '|';

/// Length of the short identifier used as a diagram node key
pub const SHORT_ID_LEN: usize = 7;

/// Format produced by `git log --date=iso`
const GIT_ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Malformed commit record on line {line}: expected 'hash|date|author|message', got '{content}'")]
    MalformedRecord { line: usize, content: String },
}

/// A single commit as reported by git
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit hash
    pub hash: String,

    /// ISO-8601 date-time, verbatim from git
    pub timestamp: String,

    /// Author name
    pub author: String,

    /// Subject line
    pub message: String,
}

impl CommitRecord {
    /// Parses one raw record line
    ///
    /// Returns `None` when the line has fewer than four fields.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(4, FIELD_SEPARATOR);
        let hash = parts.next()?;
        let timestamp = parts.next()?;
        let author = parts.next()?;
        let message = parts.next()?;

        Some(Self {
            hash: hash.to_string(),
            timestamp: timestamp.to_string(),
            author: author.to_string(),
            message: message.to_string(),
        })
    }

    /// Returns the first seven characters of the hash
    ///
    /// Hashes shorter than that are returned whole. Prefix collisions are
    /// not detected.
    pub fn short_id(&self) -> &str {
        match self.hash.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.hash[..end],
            None => &self.hash,
        }
    }

    /// Parses the timestamp, if it is in git's ISO form
    pub fn committed_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.timestamp, GIT_ISO_FORMAT).ok()
    }
}

/// Commits in the order git emitted them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitHistory {
    records: Vec<CommitRecord>,
}

impl CommitHistory {
    /// Parses raw `git log` lines, keeping their order
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, RecordError> {
        let records = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let line = line.as_ref();
                CommitRecord::parse(line).ok_or_else(|| RecordError::MalformedRecord {
                    line: idx + 1,
                    content: line.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest parseable commit time in the history
    pub fn oldest(&self) -> Option<DateTime<FixedOffset>> {
        self.records.iter().filter_map(CommitRecord::committed_at).min()
    }

    /// Latest parseable commit time in the history
    pub fn newest(&self) -> Option<DateTime<FixedOffset>> {
        self.records.iter().filter_map(CommitRecord::committed_at).max()
    }
}
