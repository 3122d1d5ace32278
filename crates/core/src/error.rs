//! Unified error types for sortrace.

use thiserror::Error;

/// All sortrace errors.
///
/// The failure surface is deliberately narrow: the core performs no I/O and
/// no parsing beyond algorithm-name lookup. Contract violations by a broken
/// algorithm (out-of-range indexing) are fatal panics, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Popped the event stream while it held no records.
    ///
    /// Callers that check `empty()` first never see this; it exists so an
    /// unguarded pop is an explicit error rather than undefined behavior.
    #[error("event stream is empty")]
    EmptyStream,

    /// Algorithm name not present in the registry.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type for sortrace operations.
pub type Result<T> = std::result::Result<T, Error>;
