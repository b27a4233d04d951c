//! Users SDK
//!
//! This crate provides the public API for the `users` module:
//! - `UsersApi` trait
//! - `User` record type
//! - Error type (`UsersError`)
//!
//! ## Usage
//!
//! ```ignore
//! use users_sdk::{UsersApi, UsersError};
//!
//! match client.get_by_external_id("did:privy:abc123").await {
//!     Ok(user) => println!("found {}", user.id),
//!     Err(UsersError::NotFound { .. }) => println!("no such user"),
//!     Err(UsersError::Internal) => println!("lookup failed"),
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::UsersApi;
pub use errors::UsersError;
pub use models::User;
