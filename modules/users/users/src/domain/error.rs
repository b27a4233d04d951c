use thiserror::Error;
use users_sdk::UsersError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {identifier}")]
    UserNotFound { identifier: String },

    /// Any fault raised by the store. `message` stays server-side.
    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::UserNotFound {
            identifier: identifier.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for UsersError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::UserNotFound { identifier } => UsersError::not_found(identifier),
            DomainError::Database { ref message } => {
                tracing::error!(error = %message, "Error fetching user");
                UsersError::internal()
            }
        }
    }
}
