//! HTTP surface for the marketing site
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/api/invite` | POST | Validate and deliver an invite request |
//! | `/healthz` | GET | Liveness check |
//!
//! Every failure, including oversized bodies and handler panics, answers
//! with a JSON `{"error": ...}` body.

mod error;
mod invite;
mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Largest accepted request body. A full-length invite is well under this.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the application router
pub fn router(state: AppState) -> Router {
    with_boundary(
        Router::new()
            .route("/api/invite", post(invite::submit_invite))
            .route("/healthz", get(health)),
    )
    .with_state(state)
}

/// Body limit and panic recovery applied to every route
fn with_boundary<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Request handler panicked: {}", detail);
    ApiError::Panicked.into_response()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
