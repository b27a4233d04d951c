use async_trait::async_trait;
use users_sdk::User;

use crate::domain::error::DomainError;

/// Repository trait for reading user records.
///
/// The domain service only sees this port, so tests can substitute an
/// in-memory or failing implementation for the ORM-backed one.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Find the single user whose external identifier equals `identifier`.
    ///
    /// Returns `Ok(None)` when nothing matches. Store faults come back as
    /// `DomainError::Database`.
    async fn find_by_external_id(&self, identifier: &str) -> Result<Option<User>, DomainError>;
}
