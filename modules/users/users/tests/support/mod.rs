#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `users` integration tests.
//!
//! Provides an in-memory database, seeding helpers and repository doubles.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use time::OffsetDateTime;
use uuid::Uuid;

use users::User;
use users::domain::error::DomainError;
use users::domain::repos::UsersRepository;
use users::infra::storage::entity::ActiveModel as UserAM;

/// Open a fresh in-memory `SQLite` database without running migrations.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn inmem_db_unmigrated() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database")
}

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let db = inmem_db_unmigrated().await;
    users::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Seed a user directly into the database.
///
/// Timestamps are truncated to whole seconds so that RFC 3339 round trips
/// compare equal.
///
/// # Panics
/// Panics if the insert fails.
pub async fn seed_user(db: &DatabaseConnection, privy_id: &str, email: Option<&str>) -> User {
    let now = OffsetDateTime::now_utc().replace_nanosecond(0).unwrap();
    let m = UserAM {
        id: Set(Uuid::new_v4()),
        privy_id: Set(privy_id.to_owned()),
        email: Set(email.map(ToOwned::to_owned)),
        display_name: Set(Some(format!("User {privy_id}"))),
        avatar_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    m.insert(db).await.expect("Failed to seed user").into()
}

/// In-memory repository double keyed by external identifier.
#[derive(Default)]
pub struct InMemoryUsersRepository {
    users: HashMap<String, User>,
    calls: AtomicUsize,
}

impl InMemoryUsersRepository {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.privy_id.clone(), u)).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_by_external_id(&self, identifier: &str) -> Result<Option<User>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.get(identifier).cloned())
    }
}

/// Repository double whose store is always unreachable.
pub struct UnreachableUsersRepository;

pub const UNREACHABLE_DETAIL: &str =
    "error communicating with database: Connection refused (os error 111)";

#[async_trait]
impl UsersRepository for UnreachableUsersRepository {
    async fn find_by_external_id(&self, _identifier: &str) -> Result<Option<User>, DomainError> {
        Err(DomainError::database(UNREACHABLE_DETAIL))
    }
}

/// Build a user value without touching any store.
pub fn make_user(privy_id: &str) -> User {
    let now = OffsetDateTime::now_utc().replace_nanosecond(0).unwrap();
    User {
        id: Uuid::new_v4(),
        privy_id: privy_id.to_owned(),
        email: Some(format!("{privy_id}@example.com")),
        display_name: None,
        avatar_url: Some("https://cdn.example.com/a.png".to_owned()),
        created_at: now,
        updated_at: now,
    }
}
