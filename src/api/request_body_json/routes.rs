// JSON request body route definitions

use axum::{routing::post, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the JSON request body endpoints
pub fn request_body_json_routes() -> Router<AppState> {
    Router::new()
        .route("/request-body-json-v1", post(handler::request_body_json_v1))
        .route("/request-body-json-v2", post(handler::request_body_json_v2))
        .route("/request-body-json-v3", post(handler::request_body_json_v3))
        .route("/request-body-json-v4", post(handler::request_body_json_v4))
        .route("/request-body-json-v5", post(handler::request_body_json_v5))
        .route("/request-body-json-v6", post(handler::request_body_json_v6))
}
