use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{debug, instrument};
use users_sdk::User;

use crate::domain::error::DomainError;
use crate::domain::repos::UsersRepository;
use crate::infra::storage::db_err;
use crate::infra::storage::entity::{Column, Entity as UserEntity};

/// ORM-based implementation of the `UsersRepository` trait.
///
/// Pooling and connection lifetime belong to the injected
/// `DatabaseConnection`; the repository itself holds no mutable state.
#[derive(Clone)]
pub struct SeaOrmUsersRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    #[instrument(
        name = "users.repo.find_by_external_id",
        skip(self),
        fields(db.operation = "SELECT", user.identifier = %identifier)
    )]
    async fn find_by_external_id(&self, identifier: &str) -> Result<Option<User>, DomainError> {
        debug!("Finding user by privy_id");

        // Bound as a query parameter; the identifier never reaches the SQL text.
        let found = UserEntity::find()
            .filter(Column::PrivyId.eq(identifier))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(found.map(Into::into))
    }
}
