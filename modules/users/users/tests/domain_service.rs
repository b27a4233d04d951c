#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Domain service behavior against repository doubles.

mod support;

use std::sync::Arc;

use support::{InMemoryUsersRepository, UnreachableUsersRepository, make_user};
use users::domain::error::DomainError;
use users::domain::service::UsersService;

#[tokio::test]
async fn returns_exact_stored_record() {
    let user = make_user("abc123");
    let svc = UsersService::new(Arc::new(InMemoryUsersRepository::with_users([
        user.clone(),
        make_user("other"),
    ])));

    let got = svc.get_by_external_id("abc123").await.unwrap();

    assert_eq!(got, user);
}

#[tokio::test]
async fn missing_identifier_is_not_found() {
    let svc = UsersService::new(Arc::new(InMemoryUsersRepository::with_users([make_user(
        "abc123",
    )])));

    let err = svc.get_by_external_id("missing-id").await.unwrap_err();

    match err {
        DomainError::UserNotFound { identifier } => assert_eq!(identifier, "missing-id"),
        other => panic!("expected UserNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_identifier_is_forwarded_and_not_found() {
    let repo = Arc::new(InMemoryUsersRepository::with_users([make_user("abc123")]));
    let svc = UsersService::new(repo.clone());

    let err = svc.get_by_external_id("").await.unwrap_err();

    assert!(matches!(err, DomainError::UserNotFound { .. }));
    assert_eq!(repo.calls(), 1, "empty identifier must still reach the store");
}

#[tokio::test]
async fn store_fault_is_database_error() {
    let svc = UsersService::new(Arc::new(UnreachableUsersRepository));

    let err = svc.get_by_external_id("abc123").await.unwrap_err();

    assert!(matches!(err, DomainError::Database { .. }));
}

#[tokio::test]
async fn repeated_lookup_is_idempotent() {
    let user = make_user("abc123");
    let repo = Arc::new(InMemoryUsersRepository::with_users([user.clone()]));
    let svc = UsersService::new(repo.clone());

    let first = svc.get_by_external_id("abc123").await.unwrap();
    let second = svc.get_by_external_id("abc123").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, user);
    assert_eq!(repo.calls(), 2, "no caching between calls");
}

#[tokio::test]
async fn concurrent_lookups_share_one_service() {
    let svc = Arc::new(UsersService::new(Arc::new(
        InMemoryUsersRepository::with_users([make_user("a"), make_user("b")]),
    )));

    let handles: Vec<_> = ["a", "b", "a", "missing"]
        .into_iter()
        .map(|id| {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.get_by_external_id(id).await.map(|u| u.privy_id) })
        })
        .collect();

    let mut results = Vec::new();
    for h in handles {
        results.push(h.await.unwrap());
    }

    assert_eq!(results[0].as_deref().unwrap(), "a");
    assert_eq!(results[1].as_deref().unwrap(), "b");
    assert_eq!(results[2].as_deref().unwrap(), "a");
    assert!(matches!(results[3], Err(DomainError::UserNotFound { .. })));
}
