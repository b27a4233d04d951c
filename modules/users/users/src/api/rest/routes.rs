use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::dto::{ErrorBody, UserDto};
use crate::api::rest::handlers;
use crate::domain::service::UsersService;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_user),
    components(schemas(UserDto, ErrorBody)),
    tags((name = "users", description = "User lookup by external identifier"))
)]
pub struct UsersApiDoc;

/// Routes of the users module with the service injected.
#[must_use]
pub fn router(service: Arc<UsersService>) -> Router {
    Router::new()
        .route("/users/{identifier}", get(handlers::get_user))
        .layer(Extension(service))
}

/// `OpenAPI` fragment describing the module's routes.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    UsersApiDoc::openapi()
}
