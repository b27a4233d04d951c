use std::sync::Arc;

use tracing::{debug, instrument};
use users_sdk::User;

use crate::domain::error::DomainError;
use crate::domain::repos::UsersRepository;

/// Stateless lookup service. The repository is injected at construction.
#[derive(Clone)]
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
}

impl UsersService {
    #[must_use]
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    /// Fetch the user stored under `identifier`.
    ///
    /// The identifier is not validated here; an empty or malformed value is
    /// forwarded to the store and simply does not match.
    ///
    /// # Errors
    /// Returns `DomainError::UserNotFound` when no record matches and
    /// `DomainError::Database` when the store fails.
    #[instrument(
        name = "users.service.get_by_external_id",
        skip(self),
        fields(user.identifier = %identifier)
    )]
    pub async fn get_by_external_id(&self, identifier: &str) -> Result<User, DomainError> {
        debug!("Getting user by external id");

        let user = self
            .repo
            .find_by_external_id(identifier)
            .await?
            .ok_or_else(|| DomainError::user_not_found(identifier))?;

        debug!(user.id = %user.id, "Successfully retrieved user");
        Ok(user)
    }
}
