// Unified JSON envelope for error and fallback responses
// Successful endpoints write their own bodies through the BodyWriter

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::utils::utils::to_two_space_indented_json;

/// Standard JSON envelope
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    pub status: String,   // HTTP status text (e.g. "OK", "NOT_FOUND")
    pub code: u16,        // HTTP status code
    pub data: Value,      // Response payload
    pub messages: Vec<String>,
    pub date: String,     // ISO timestamp
}

/// Convenience struct for building envelope responses
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            messages: Vec::new(),
        }
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    pub fn into_format(self) -> ResponseFormat {
        ResponseFormat {
            status: status_text(self.status_code),
            code: self.status_code.as_u16(),
            data: Value::Null,
            messages: self.messages,
            date: Utc::now().to_rfc3339(),
        }
    }
}

/// "Not Found" -> "NOT_FOUND"
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Logs the envelope with two-space indentation
fn log_formatted_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => debug!("\nFinal response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status_code: StatusCode = self.status_code;
        let wrapped: ResponseFormat = self.into_format();

        log_formatted_response(&wrapped);

        let json_body: Vec<u8> = serde_json::to_vec(&wrapped).unwrap_or_else(|_| b"{}".to_vec());
        let mut response: Response = (status_code, json_body).into_response();

        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        response
    }
}
