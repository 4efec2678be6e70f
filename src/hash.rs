//! Content digests and bucket-placement hashing.
//!
//! Two hash functions with two distinct jobs:
//!
//! - [`digest_file`] computes a streaming MD5 digest of a file's full byte
//!   content and renders it as 32 lowercase hex characters. This is the
//!   *identity* of a file for duplicate detection: byte-identical files
//!   always share a digest, and digest collisions are treated as identity
//!   (the standard, accepted risk of content-hash deduplication).
//! - [`bucket_hash`] is a fast, non-cryptographic FNV-1 fold used only to
//!   place digest keys into hash-table buckets. It is deterministic but
//!   makes no adversarial-input guarantees.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};

/// Length of a rendered content digest in hex characters (128-bit MD5).
pub const DIGEST_LENGTH: usize = 32;

/// Read buffer size for streaming file digests.
///
/// Memory use is independent of file size; the accumulator produces the
/// same digest regardless of how reads happen to be chunked.
const READ_BUF_SIZE: usize = 64 * 1024;

/// FNV-1 offset basis (64-bit). See <http://isthe.com/chongo/tech/comp/fnv/>.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1 prime (64-bit).
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Errors that can occur while digesting a file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Compute the content digest of a file as lowercase hex.
///
/// Reads the file in bounded-size chunks and folds each chunk into a
/// streaming MD5 accumulator, so arbitrarily large files digest in
/// constant memory. Two invocations on byte-identical content always
/// yield the same digest.
///
/// # Errors
///
/// Returns a [`HashError`] if the file cannot be opened or read.
pub fn digest_file(path: &Path) -> Result<String, HashError> {
    let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; READ_BUF_SIZE];

    loop {
        let n = file.read(&mut buf).map_err(|e| HashError::from_io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the FNV-1 hash of a byte sequence.
///
/// Used exclusively for bucket placement in [`crate::table::HashTable`],
/// never for duplicate identity. Stable: the same bytes always produce
/// the same hash.
#[must_use]
pub fn bucket_hash(data: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in data {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
