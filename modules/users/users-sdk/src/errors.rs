//! Public error types for the `users` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `UsersApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersError {
    /// No user is stored under the given external identifier.
    #[error("User not found: {identifier}")]
    NotFound { identifier: String },

    /// The store failed. Details are logged server-side only.
    #[error("Internal error")]
    Internal,
}

impl UsersError {
    /// Create a `NotFound` error.
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Create an Internal error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }

    /// Returns `true` for the expected "no such record" outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
