//! Contract error types for the brokerage service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Brokerage service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokerageError {
    /// Row not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind (owner, client, ...)
        resource: &'static str,
        /// Row identifier
        id: String,
    },

    /// Unique constraint violated (national ID, license, one contract per property)
    #[error("Duplicate {resource}: {detail}")]
    Duplicate {
        resource: &'static str,
        detail: String,
    },

    /// Delete rejected because a contract still references the row
    #[error("{resource} {id} is referenced by a contract and cannot be deleted")]
    Protected { resource: &'static str, id: String },

    /// Insert or update pointed at a row that does not exist
    #[error("Invalid reference on {resource}: {detail}")]
    InvalidReference {
        resource: &'static str,
        detail: String,
    },

    /// Field validation failed before reaching storage
    #[error("Validation error on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl BrokerageError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
