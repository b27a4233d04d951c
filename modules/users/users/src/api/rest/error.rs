use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::api::rest::dto::ErrorBody;
use crate::domain::error::DomainError;

pub const USER_NOT_FOUND: &str = "User not found";
pub const FAILED_TO_FETCH_USER: &str = "Failed to fetch user";

/// Caller-visible error: a status plus one fixed, non-sensitive message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: USER_NOT_FOUND,
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: FAILED_TO_FETCH_USER,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_owned(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Map a domain error to its HTTP representation.
///
/// Store faults are logged here with full detail; the response only carries
/// the generic message.
#[must_use]
pub fn domain_error_to_api(e: &DomainError) -> ApiError {
    match e {
        DomainError::UserNotFound { .. } => ApiError::not_found(),
        DomainError::Database { .. } => {
            tracing::error!(error = %e, "Error fetching user");
            ApiError::internal()
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        domain_error_to_api(&e)
    }
}
