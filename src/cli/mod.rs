//! # Command-Line Interface
//!
//! ```bash
//! commit-graph [--verbose] [--format text|json] <config-file-path>
//! ```
//!
//! ## Flow
//!
//! 1. Load and validate the TOML config
//! 2. Read commits with `git log --since`
//! 3. Render the Mermaid chain
//! 4. Write it to `output_path`
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Graph written, or no commits in range |
//! | 1 | Usage, config, git, or I/O error |
//!
//! ## Output Formats
//!
//! - `text` (default) - progress lines and a confirmation
//! - `json` - one summary object on stdout
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.

mod app;
mod output;

pub use app::{run, Cli, NO_COMMITS_MESSAGE, USAGE};
pub use output::{Output, OutputFormat};
