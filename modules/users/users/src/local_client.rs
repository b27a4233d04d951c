//! Local (in-process) client for the users module.

use std::sync::Arc;

use async_trait::async_trait;
use users_sdk::{User, UsersApi, UsersError};

use crate::domain::service::UsersService;

/// Local client adapter implementing the SDK API trait.
///
/// Bridges the domain service to `UsersApi`, converting `DomainError` into
/// the public `UsersError`.
pub struct UsersLocalClient {
    service: Arc<UsersService>,
}

impl UsersLocalClient {
    #[must_use]
    pub fn new(service: Arc<UsersService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersApi for UsersLocalClient {
    async fn get_by_external_id(&self, identifier: &str) -> Result<User, UsersError> {
        self.service
            .get_by_external_id(identifier)
            .await
            .map_err(Into::into)
    }
}
