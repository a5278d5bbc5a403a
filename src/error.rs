//! Error types for wiredump.

use thiserror::Error;

/// Main error type for all dump operations.
///
/// Every variant is fatal at file granularity: processing of the current
/// capture stops at the first error and the error propagates as the
/// process exit status.
#[derive(Debug, Error)]
pub enum DumpError {
    /// I/O error opening or reading a capture file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer refused to grow past its capacity ceiling.
    #[error("buffer limit exceeded: {requested} bytes requested, limit {limit}")]
    Buffer { requested: usize, limit: usize },

    /// Malformed frame header (distinct from "not enough data yet").
    #[error("malformed frame: {0}")]
    Frame(String),

    /// Payload bytes do not form a valid value tree.
    #[error(transparent)]
    Decode(#[from] rmpv::decode::Error),

    /// Payload bytes left over after the value tree was read.
    #[error("{remaining} payload bytes left after value")]
    TrailingPayload { remaining: usize },
}

impl DumpError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            DumpError::Io(_) => 1,
            DumpError::Buffer { .. } => 2,
            DumpError::Frame(_) => 3,
            DumpError::Decode(_) | DumpError::TrailingPayload { .. } => 4,
        }
    }
}

/// Result type alias using DumpError.
pub type Result<T> = std::result::Result<T, DumpError>;
