//! Domain layer: the lookup service, its repository port and error type.
//!
//! The domain layer MUST NOT import `api::*`; the dependency runs API -> Domain.

pub mod error;
pub mod repos;
pub mod service;
