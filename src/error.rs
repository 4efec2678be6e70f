//! Structured error handling and exit codes.

use serde::Serialize;

/// Process exit codes.
///
/// Follows the grep convention:
/// - 0: Completed normally (in quiet mode, at least one duplicate exists)
/// - 1: Quiet mode completed with no duplicates found
/// - 2: An unexpected error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Scan completed; outside quiet mode this is the only success code.
    Success = 0,
    /// Quiet mode: scan completed and found no duplicates.
    NoDuplicates = 1,
    /// An unexpected error occurred.
    GeneralError = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::NoDuplicates => "DS001",
            Self::GeneralError => "DS002",
        }
    }
}

/// Structured error information for JSON output (`--json-errors`).
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DS002")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
