// Handlers that read the request body as plain text

use axum::{
    body::Body,
    extract::{Request, State},
    response::Response,
};
use tracing::{info, instrument};

use crate::body::{Charset, HttpEntity, RequestBody, ResponseEntity};
use crate::config::state::AppState;
use crate::utils::error_handler::ApiError;

/// Takes the whole request and drains its body as UTF-8
#[instrument(skip_all, fields(method = %request.method(), uri = %request.uri()))]
pub async fn request_body_string_v1(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    let message_body: String = state
        .reader
        .read_text_with(request.into_body(), Charset::Utf8)
        .await?;

    info!("messageBody = {}", message_body);

    Ok(state.writer.write_body("ok")?)
}

/// Reads only the body stream, writes straight to the response
#[instrument(skip(state, body))]
pub async fn request_body_string_v2(
    State(state): State<AppState>,
    body: Body,
) -> Result<Response, ApiError> {
    let message_body: String = state.reader.read_text_with(body, Charset::Utf8).await?;
    info!("messageBody={}", message_body);

    Ok(state.writer.write_body("ok")?)
}

/// Headers and body in, entity out
#[instrument(skip(state, entity))]
pub async fn request_body_string_v3(
    State(state): State<AppState>,
    entity: HttpEntity<String>,
) -> Result<Response, ApiError> {
    let message_body: String = entity.into_body();
    info!("messageBody={}", message_body);

    Ok(state.writer.write(ResponseEntity::ok("ok"))?)
}

#[instrument(skip(state, message_body))]
pub async fn request_body_string_v4(
    State(state): State<AppState>,
    RequestBody(message_body): RequestBody<String>,
) -> Result<Response, ApiError> {
    info!("messageBody={}", message_body);

    Ok(state.writer.write_body("ok")?)
}
