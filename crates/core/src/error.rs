//! Error types for Aurora.
//!
//! Only structural violations of the append-only invariant are errors on
//! the ledger path. Lookups on unknown ids and failed classifications are
//! expressed as `Option`/empty results, never as errors.

use thiserror::Error;

use crate::event::EventId;

/// Result alias used across the workspace.
pub type AuroraResult<T> = Result<T, AuroraError>;

/// Errors surfaced by Aurora.
#[derive(Debug, Error)]
pub enum AuroraError {
    /// An event with this id is already in the ledger; the ledger is unchanged.
    #[error("duplicate event id {id}")]
    DuplicateId {
        /// The rejected id.
        id: EventId,
    },

    /// Reading or writing a snapshot or config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot record could not be encoded or decoded.
    #[error("serialization error: {reason}")]
    Serialization {
        /// What went wrong.
        reason: String,
    },

    /// Configuration is malformed.
    #[error("invalid configuration: {reason}")]
    Config {
        /// What went wrong.
        reason: String,
    },
}

impl AuroraError {
    /// Create a duplicate id error.
    pub fn duplicate_id(id: EventId) -> Self {
        AuroraError::DuplicateId { id }
    }

    /// Create a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        AuroraError::Serialization {
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        AuroraError::Config {
            reason: reason.into(),
        }
    }

    /// Whether this is a duplicate id rejection.
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, AuroraError::DuplicateId { .. })
    }
}
