//! Directory traversal and duplicate classification.
//!
//! The scanner walks each supplied path depth-first, synchronously and on
//! a single thread, digesting every file it reaches and consulting a
//! digest-keyed [`HashTable`] to decide whether the file's content has
//! been seen before. The first file observed with a given digest claims
//! that digest for the whole run; every later file with the same digest
//! is a duplicate of it, regardless of name or directory depth.
//!
//! The scan is best-effort: an unreadable file or unopenable directory is
//! logged and skipped, never fatal, and never counted as a duplicate.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::{DuplicateScanner, ScanOptions};
//! use dupescan::table::HashTable;
//! use std::path::PathBuf;
//!
//! let mut scanner = DuplicateScanner::new(
//!     HashTable::default(),
//!     ScanOptions::default(),
//!     std::io::stdout(),
//! );
//! let duplicates = scanner.scan(&[PathBuf::from("/home/user/Downloads")]);
//! println!("{} duplicates", duplicates);
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::hash::digest_file;
use crate::table::{HashTable, Value};

/// Reporting options for a scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Track the duplicate count only; suppress per-file report lines.
    pub count_only: bool,
    /// Suppress all report output; the count (and exit status) still
    /// reflect what was found.
    pub quiet: bool,
}

impl ScanOptions {
    /// Whether per-duplicate report lines should be written.
    #[must_use]
    pub fn reports_duplicates(&self) -> bool {
        !self.count_only && !self.quiet
    }
}

/// Terminal classification of a single file.
///
/// Every file reaches exactly one of these states in a single
/// classification step and is never revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// First file seen with its content digest; now registered in the table.
    Original,
    /// Content already registered; carries the first-seen path.
    Duplicate(PathBuf),
    /// The file could not be opened or read; skipped entirely.
    Unreadable,
}

/// Walks paths, digests files, and classifies each as original or
/// duplicate against a digest-keyed table.
///
/// Owns the table for the duration of the scan; [`into_table`] hands it
/// back for inspection afterwards.
///
/// [`into_table`]: DuplicateScanner::into_table
#[derive(Debug)]
pub struct DuplicateScanner<W: Write> {
    /// Digest → first-seen path.
    table: HashTable,
    options: ScanOptions,
    /// Where duplicate report lines are written (stdout in production).
    sink: W,
}

impl<W: Write> DuplicateScanner<W> {
    /// Create a scanner over a caller-supplied table.
    ///
    /// The table's existing contents participate in classification, so a
    /// pre-seeded table treats matching files as duplicates of the seeds.
    #[must_use]
    pub fn new(table: HashTable, options: ScanOptions, sink: W) -> Self {
        Self {
            table,
            options,
            sink,
        }
    }

    /// Consume the scanner, returning the table of seen digests.
    #[must_use]
    pub fn into_table(self) -> HashTable {
        self.table
    }

    /// Scan every supplied path, returning the total duplicate count.
    ///
    /// Directories are walked recursively; anything else is classified
    /// directly as a file. Paths share one table, so duplicates are
    /// detected across arguments as well as within them.
    pub fn scan(&mut self, paths: &[PathBuf]) -> u64 {
        let mut count = 0;
        for path in paths {
            if path.is_dir() {
                count += self.scan_directory(path);
            } else {
                count += u64::from(matches!(
                    self.classify_file(path),
                    Classification::Duplicate(_)
                ));
            }
        }
        count
    }

    /// Recursively scan a directory, returning its duplicate count.
    ///
    /// Child paths are composed from the parent path and the entry name,
    /// and each is classified by that fully composed path. Entries are
    /// visited in whatever order the OS enumerates them. A directory (or
    /// an entry within it) that cannot be read is logged and contributes
    /// zero; the scan continues with whatever remains.
    pub fn scan_directory(&mut self, root: &Path) -> u64 {
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Unable to open directory {}: {}", root.display(), e);
                return 0;
            }
        };

        let mut count = 0;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Unable to read entry in {}: {}", root.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_dir() {
                count += self.scan_directory(&path);
            } else {
                count += u64::from(matches!(
                    self.classify_file(&path),
                    Classification::Duplicate(_)
                ));
            }
        }
        count
    }

    /// Digest one file and classify it against the table.
    ///
    /// An unreadable file is logged and skipped (fail-open): it is neither
    /// counted nor inserted, and the scan carries on. A duplicate never
    /// displaces the table's first occupant for its digest. Under
    /// reporting options, each duplicate is written to the sink the moment
    /// it is found.
    pub fn classify_file(&mut self, path: &Path) -> Classification {
        let digest = match digest_file(path) {
            Ok(digest) => digest,
            Err(e) => {
                log::debug!("Skipping unreadable file: {}", e);
                return Classification::Unreadable;
            }
        };

        match self.table.get(&digest) {
            Some(Value::Text(original)) => {
                let original = PathBuf::from(original);
                if self.options.reports_duplicates() {
                    if let Err(e) = writeln!(
                        self.sink,
                        "{} is a duplicate of {}",
                        path.display(),
                        original.display()
                    ) {
                        log::warn!("Failed to write duplicate report: {}", e);
                    }
                }
                Classification::Duplicate(original)
            }
            Some(Value::Number(_)) => {
                // A digest key can only ever be stored with a path payload.
                log::error!("Non-path value stored for digest {}", digest);
                Classification::Unreadable
            }
            None => {
                self.table
                    .insert(&digest, Value::Text(path.display().to_string()));
                Classification::Original
            }
        }
    }
}
