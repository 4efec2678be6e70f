//! dupescan - Content-addressed duplicate file finder
//!
//! Locates duplicate files under one or more paths by content, not name:
//! every reachable file gets a streaming MD5 digest, digests index into a
//! fixed-capacity separate-chaining [`table::HashTable`], and the
//! [`scanner::DuplicateScanner`] classifies each file as an original, a
//! duplicate of the first file seen with that content, or unreadable.

pub mod cli;
pub mod error;
pub mod hash;
pub mod logging;
pub mod scanner;
pub mod table;

use anyhow::Result;

use crate::cli::Cli;
use crate::error::ExitCode;
use crate::scanner::{DuplicateScanner, ScanOptions};
use crate::table::HashTable;

/// Run a full scan from parsed CLI arguments and select the exit code.
///
/// Wires the components together: initializes logging, creates the digest
/// table with the requested bucket count (`0` selects the default), scans
/// every supplied path, prints the total under `--count`, and maps the
/// result to an [`ExitCode`]. In quiet mode an empty result exits nonzero
/// so scripts can test for duplicates by status alone.
///
/// # Errors
///
/// Returns an error only for failures outside the scan itself (the scan
/// is best-effort and absorbs per-file and per-directory I/O errors).
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let options = ScanOptions {
        count_only: cli.count,
        quiet: cli.quiet,
    };
    let table = HashTable::new(cli.buckets);
    log::debug!(
        "Scanning {} path(s) with {} bucket(s)",
        cli.paths.len(),
        table.capacity()
    );

    let mut scanner = DuplicateScanner::new(table, options, std::io::stdout());
    let duplicates = scanner.scan(&cli.paths);
    let table = scanner.into_table();

    log::debug!(
        "Scan complete: {} duplicate(s), {} distinct digest(s)",
        duplicates,
        table.len()
    );
    if log::log_enabled!(log::Level::Trace) {
        let mut dump = Vec::new();
        table.format(&mut dump)?;
        log::trace!("digest table:\n{}", String::from_utf8_lossy(&dump));
    }

    if cli.count {
        println!("{}", duplicates);
    }

    if cli.quiet && duplicates == 0 {
        Ok(ExitCode::NoDuplicates)
    } else {
        Ok(ExitCode::Success)
    }
}
