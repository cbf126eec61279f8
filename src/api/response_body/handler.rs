// Handlers that only produce a response body

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::instrument;

use crate::body::ResponseEntity;
use crate::config::state::AppState;
use crate::models::HelloData;
use crate::utils::error_handler::ApiError;

/// Status declared up front for `response_body_json_v2`
pub const RESPONSE_BODY_JSON_V2_STATUS: StatusCode = StatusCode::OK;

fn sample_data() -> HelloData {
    HelloData::new("userA", 20)
}

#[instrument(skip(state))]
pub async fn response_body_string_v1(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(state.writer.write_body("ok")?)
}

/// Body plus an explicit status
#[instrument(skip(state))]
pub async fn response_body_string_v2(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(state.writer.write(ResponseEntity::new("ok", StatusCode::OK))?)
}

#[instrument(skip(state))]
pub async fn response_body_string_v3(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(state.writer.write_body(String::from("ok"))?)
}

#[instrument(skip(state))]
pub async fn response_body_json_v1(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(state.writer.write(ResponseEntity::new(sample_data(), StatusCode::OK))?)
}

#[instrument(skip(state))]
pub async fn response_body_json_v2(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(state
        .writer
        .write(ResponseEntity::new(sample_data(), RESPONSE_BODY_JSON_V2_STATUS))?)
}
