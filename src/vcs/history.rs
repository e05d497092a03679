//! Commit history query

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// `--pretty` format: full hash, author date, author name, subject
pub const LOG_FORMAT: &str = "%H|%ad|%an|%s";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to run git")]
    Spawn(#[source] io::Error),

    #[error("git log exited with {status}: {stderr}")]
    CommandFailed { status: ExitStatus, stderr: String },
}

/// Lists commits made since `since_date`, one raw record per line
///
/// Lines are returned in the order git emits them (newest first). An empty
/// vector means no commits matched.
pub fn get_commit_history(repo_path: &Path, since_date: &str) -> Result<Vec<String>, HistoryError> {
    let output = Command::new("git")
        .arg("log")
        .arg(format!("--since={}", since_date))
        .arg(format!("--pretty=format:{}", LOG_FORMAT))
        .arg("--date=iso")
        .current_dir(repo_path)
        .output()
        .map_err(HistoryError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HistoryError::CommandFailed {
            status: output.status,
            stderr: single_line(&stderr),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(split_records(&stdout))
}

/// Joins the non-empty lines of git's stderr with `; `
fn single_line(stderr: &str) -> String {
    stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Splits git output into record lines, preserving order
fn split_records(stdout: &str) -> Vec<String> {
    stdout.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=Test Author", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .env("GIT_AUTHOR_DATE", "2024-01-15T12:00:00+00:00")
            .env("GIT_COMMITTER_DATE", "2024-01-15T12:00:00+00:00")
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn split_records_keeps_order() {
        let out = "bbb|d|a|second\naaa|d|a|first";
        assert_eq!(split_records(out), vec!["bbb|d|a|second", "aaa|d|a|first"]);
    }

    #[test]
    fn split_records_of_empty_output() {
        assert!(split_records("").is_empty());
    }

    #[test]
    fn single_line_joins_stderr() {
        let stderr = "fatal: not a git repository\n\nhint: run git init\n";
        assert_eq!(single_line(stderr), "fatal: not a git repository; hint: run git init");
        assert_eq!(single_line(""), "");
    }

    #[test]
    fn reads_commits_from_repository() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "first | with pipe"]);

        let lines = get_commit_history(dir.path(), "2020-01-01").unwrap();

        assert_eq!(lines.len(), 1);
        let fields: Vec<&str> = lines[0].splitn(4, '|').collect();
        assert_eq!(fields[0].len(), 40);
        assert_eq!(fields[1], "2024-01-15 12:00:00 +0000");
        assert_eq!(fields[2], "Test Author");
        assert_eq!(fields[3], "first | with pipe");
    }

    #[test]
    fn future_since_date_yields_nothing() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "only"]);

        let lines = get_commit_history(dir.path(), "2100-01-01").unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn non_repository_fails() {
        let dir = TempDir::new().unwrap();
        let probe = Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        // Only meaningful when the temp dir is not nested in a repository
        if probe.status.success() {
            return;
        }

        let err = get_commit_history(dir.path(), "2020-01-01").unwrap_err();
        assert!(matches!(err, HistoryError::CommandFailed { .. }));
    }
}
