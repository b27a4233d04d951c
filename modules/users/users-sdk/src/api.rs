//! `UsersApi` trait definition.

use async_trait::async_trait;

use crate::errors::UsersError;
use crate::models::User;

/// Public API trait for the `users` module.
///
/// In-process consumers hold an `Arc<dyn UsersApi>` and never touch the
/// store directly:
/// ```ignore
/// let user = client.get_by_external_id("did:privy:abc123").await?;
/// ```
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Look up a user by its external identifier.
    ///
    /// The identifier is forwarded as-is; an empty or malformed value simply
    /// yields `UsersError::NotFound`.
    async fn get_by_external_id(&self, identifier: &str) -> Result<User, UsersError>;
}
