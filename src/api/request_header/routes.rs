// Header route definition

use axum::{routing::any, Router};

use crate::config::state::AppState;
use super::handler;

/// `/header` answers every method
pub fn request_header_routes() -> Router<AppState> {
    Router::new().route("/header", any(handler::headers_handler))
}
