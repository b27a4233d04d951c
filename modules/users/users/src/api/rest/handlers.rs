use std::sync::Arc;

use axum::Extension;
use axum::Json;
use axum::extract::Path;
use tracing::debug;

use crate::api::rest::dto::{ErrorBody, UserDto, UserPath};
use crate::api::rest::error::ApiError;
use crate::domain::service::UsersService;

/// Look up a user by external identifier.
///
/// # Errors
/// `404` with `{"error":"User not found"}` when nothing matches, `500` with
/// `{"error":"Failed to fetch user"}` when the store fails.
#[utoipa::path(
    get,
    path = "/users/{identifier}",
    tag = "users",
    params(UserPath),
    responses(
        (status = 200, description = "The stored user record", body = UserDto),
        (status = 404, description = "No user for this identifier", body = ErrorBody),
        (status = 500, description = "The store failed", body = ErrorBody),
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<UsersService>>,
    Path(path): Path<UserPath>,
) -> Result<Json<UserDto>, ApiError> {
    debug!(user.identifier = %path.identifier, "Getting user details");

    let user = svc.get_by_external_id(&path.identifier).await?;
    Ok(Json(UserDto::from(user)))
}
