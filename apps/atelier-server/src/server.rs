//! HTTP host: router assembly, middleware stack and the serve loop.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;
use tracing::field::Empty;
use users::Users;

use crate::config::ServerConfig;
use crate::request_id::{self, MakeReqId};
use crate::signals;

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn openapi_document() -> utoipa::openapi::OpenApi {
    let mut doc = Users::openapi();
    "Atelier API".clone_into(&mut doc.info.title);
    env!("CARGO_PKG_VERSION").clone_into(&mut doc.info.version);
    doc
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi_document())
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(request_id::header())
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            )
            // Handlers log their own faults; a 5xx is not a second error entry.
            .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
    )
}

/// Assemble routes and the middleware stack.
///
/// Runtime order, outermost first: `SetRequestId`, `PropagateRequestId`,
/// trace span, timeout, CORS (if enabled), router.
pub fn build_router(cfg: &ServerConfig, users: &Users) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(|| async { "ok" }))
        .route("/openapi.json", get(openapi_json))
        .merge(users.router());

    if cfg.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(cfg.request_timeout_secs),
    ));

    router = apply_trace_layer(router);

    let x_request_id = request_id::header();
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeReqId))
}

fn parse_bind_address(bind_addr: &str) -> Result<SocketAddr> {
    bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{bind_addr}'"))
}

/// Bind and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the address is invalid, binding fails, or the server
/// stops abnormally.
pub async fn serve(cfg: &ServerConfig, router: Router) -> Result<()> {
    let addr = parse_bind_address(&cfg.bind_addr)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handling failed; shutting down");
        }
        tracing::info!("HTTP server shutting down gracefully");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}
