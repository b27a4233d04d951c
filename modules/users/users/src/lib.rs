//! Users Module
//!
//! Read-only lookup of user records by their external identifier, exposed
//! over REST (`GET /users/{identifier}`) and in-process via `UsersApi`.
//!
//! ## Public API
//!
//! The public API is defined in the `users-sdk` crate and re-exported here:
//! - `UsersApi` - trait for in-process callers
//! - `User` - the stored record
//! - `UsersError` - error types
//!
//! Hosts wire the module through [`Users`], which owns the service and hands
//! out the router, the `OpenAPI` document and the local client.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use users_sdk::{User, UsersApi, UsersError};

// === MODULE DEFINITION ===
pub mod module;
pub use module::Users;

// === LOCAL CLIENT ===
// Local client adapter that implements UsersApi
pub mod local_client;

// === INTERNAL MODULES ===
// Exposed for integration tests; external consumers should stick to the SDK types.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
