// Response body route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub fn response_body_routes() -> Router<AppState> {
    Router::new()
        .route("/response-body-string-v1", get(handler::response_body_string_v1))
        .route("/response-body-string-v2", get(handler::response_body_string_v2))
        .route("/response-body-string-v3", get(handler::response_body_string_v3))
        .route("/response-body-json-v1", get(handler::response_body_json_v1))
        .route("/response-body-json-v2", get(handler::response_body_json_v2))
}
