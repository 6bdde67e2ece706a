//! Error types shared across the Agora crates.
//!
//! The guardian itself never fails: absent inputs produce a defined boolean.
//! Errors exist for the collaborators around it - the audit sink rejects
//! malformed calls, and settings loading can fail on bad files.

use thiserror::Error;

/// The unified error type for the Agora workspace.
#[derive(Debug, Error)]
pub enum AgoraError {
    /// A caller passed a missing, wrong-kind, or out-of-range argument to
    /// the audit sink.
    ///
    /// This is a programming error, not a recoverable condition: callers
    /// should fail the enclosing operation rather than suppress it.
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The audit store could not append a record.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },
}

/// Convenience alias used throughout the Agora crates.
pub type AgoraResult<T> = Result<T, AgoraError>;
