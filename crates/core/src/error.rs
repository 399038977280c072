//! Domain error model.

use thiserror::Error;

/// Result type used across the ledger crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Ledgers absorb most of these at their public surface (duplicate adds are
/// ignored, failed assignments are no-ops). The `try_*` operations expose them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced dependent does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation collides with existing state (duplicate name, existing assignment).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
