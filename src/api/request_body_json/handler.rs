// Handlers that read a JSON record from the request body
//
// Versions go from most manual (drain the stream and decode by hand) to
// least (the extractor hands over a decoded record).

use axum::{
    body::Body,
    extract::State,
    http::HeaderMap,
    response::Response,
};
use tracing::{info, instrument};

use crate::body::{Charset, HttpEntity, RequestBody, ResponseEntity};
use crate::config::state::AppState;
use crate::models::HelloData;
use crate::utils::error_handler::ApiError;

/// Reads the raw stream as UTF-8, then decodes it with the codec
#[instrument(skip(state, body))]
pub async fn request_body_json_v1(
    State(state): State<AppState>,
    body: Body,
) -> Result<Response, ApiError> {
    let message_body: String = state.reader.read_text_with(body, Charset::Utf8).await?;
    info!("messageBody = {}", message_body);

    let data: HelloData = state.codec.read_value(&message_body)?;
    info!("username = {}, age = {}", data.username, data.age);

    Ok(state.writer.write_body("ok")?)
}

/// Body arrives as a String, decoding is still explicit
#[instrument(skip(state, message_body))]
pub async fn request_body_json_v2(
    State(state): State<AppState>,
    RequestBody(message_body): RequestBody<String>,
) -> Result<Response, ApiError> {
    let data: HelloData = state.codec.read_value(&message_body)?;
    info!("username = {}, age = {}", data.username, data.age);

    Ok(state.writer.write_body("ok")?)
}

/// Body arrives already decoded
#[instrument(skip(state, data))]
pub async fn request_body_json_v3(
    State(state): State<AppState>,
    RequestBody(data): RequestBody<HelloData>,
) -> Result<Response, ApiError> {
    info!("username = {}, age = {}", data.username, data.age);

    Ok(state.writer.write_body("ok")?)
}

/// Decoded body plus the request headers
#[instrument(skip(state, entity))]
pub async fn request_body_json_v4(
    State(state): State<AppState>,
    entity: HttpEntity<HelloData>,
) -> Result<Response, ApiError> {
    let headers: &HeaderMap = &entity.headers;
    info!("content-type = {:?}", headers.get(axum::http::header::CONTENT_TYPE));

    let data: HelloData = entity.into_body();
    info!("username = {}, age = {}", data.username, data.age);

    Ok(state.writer.write_body("ok")?)
}

/// Echoes the record back as JSON
#[instrument(skip(state, data))]
pub async fn request_body_json_v5(
    State(state): State<AppState>,
    RequestBody(data): RequestBody<HelloData>,
) -> Result<Response, ApiError> {
    info!("username={}, age={}", data.username, data.age);

    Ok(state.writer.write_body(data)?)
}

/// Echoes the record back wrapped in an entity
#[instrument(skip(state, data))]
pub async fn request_body_json_v6(
    State(state): State<AppState>,
    RequestBody(data): RequestBody<HelloData>,
) -> Result<Response, ApiError> {
    info!("username={}, age={}", data.username, data.age);

    Ok(state.writer.write(ResponseEntity::ok(data))?)
}
