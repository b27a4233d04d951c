//! Module wiring: builds the service once and hands out its adapters.

use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use users_sdk::UsersApi;

use crate::api::rest::routes;
use crate::domain::repos::UsersRepository;
use crate::domain::service::UsersService;
use crate::infra::storage::SeaOrmUsersRepository;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::UsersLocalClient;

/// The users module as seen by a host process.
#[derive(Clone)]
pub struct Users {
    service: Arc<UsersService>,
}

impl Users {
    /// Wire the module over an ORM connection.
    #[must_use]
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmUsersRepository::new(db)))
    }

    /// Wire the module over any repository implementation.
    #[must_use]
    pub fn with_repository(repo: Arc<dyn UsersRepository>) -> Self {
        Self {
            service: Arc::new(UsersService::new(repo)),
        }
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    /// Returns the store error if a migration fails.
    pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
        tracing::info!("Running users migrations");
        Migrator::up(db, None).await
    }

    #[must_use]
    pub fn service(&self) -> Arc<UsersService> {
        Arc::clone(&self.service)
    }

    /// REST routes (`GET /users/{identifier}`).
    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(self.service())
    }

    /// `OpenAPI` description of [`Users::router`].
    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        routes::openapi()
    }

    /// In-process client implementing `UsersApi`.
    #[must_use]
    pub fn client(&self) -> Arc<dyn UsersApi> {
        Arc::new(UsersLocalClient::new(self.service()))
    }
}
