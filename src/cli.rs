//! Command-line interface definitions.
//!
//! All arguments are defined with the clap derive API; clap owns usage
//! text and program-name concerns, and the parsed values are threaded
//! explicitly into the components that need them.
//!
//! # Example
//!
//! ```bash
//! # Report each duplicate as it is found
//! dupescan ~/Downloads ~/Pictures
//!
//! # Only print the total number of duplicates
//! dupescan -c ~/Downloads
//!
//! # No output at all; exit status says whether duplicates exist
//! dupescan -q ~/Downloads
//!
//! # Verbose mode for debugging
//! dupescan -v ~/Downloads
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Content-addressed duplicate file finder.
///
/// Scans the given paths, digesting every reachable file, and reports
/// each file whose content was already seen earlier in the run.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to scan (directories recurse)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only display the total number of duplicates
    #[arg(short, long)]
    pub count: bool,

    /// Do not write anything; exit with status 0 if a duplicate was found
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of hash-table buckets (0 selects the built-in default)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub buckets: usize,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}
