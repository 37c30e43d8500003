//! Error types for `wildpop`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `wildpop` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Archive Errors ====================
    /// The source path does not resolve to an existing archive.
    #[error("archive not found: {path}")]
    ArchiveNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The archive could not be decompressed or structurally parsed.
    #[error("corrupt archive: {reason}")]
    CorruptArchive {
        /// Description of what failed while decoding.
        reason: String,
    },

    // ==================== Splice Errors ====================
    /// A removal plan cannot satisfy the requested count without draining
    /// a gender to zero in some array.
    #[error("not enough animals to remove: requested {requested}, only {available} available")]
    InsufficientSubjects {
        /// How many removals the caller asked for.
        requested: u32,
        /// How many removals the plan could supply across all arrays.
        available: u32,
    },
}

/// A specialized Result type for `wildpop` operations.
pub type Result<T> = std::result::Result<T, Error>;
