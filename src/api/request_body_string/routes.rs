// String request body route definitions

use axum::{routing::post, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the plain-text request body endpoints
pub fn request_body_string_routes() -> Router<AppState> {
    Router::new()
        .route("/request-body-string-v1", post(handler::request_body_string_v1))
        .route("/request-body-string-v2", post(handler::request_body_string_v2))
        .route("/request-body-string-v3", post(handler::request_body_string_v3))
        .route("/request-body-string-v4", post(handler::request_body_string_v4))
}
