// Error types and global error handling for HTTP middleware layers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError,
};
use std::error::Error;
use thiserror::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

use crate::body::BodyError;
use crate::utils::response_handler::HandlerResponse;

/// Anything a handler or extractor can fail with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Body(#[from] BodyError),

    #[error("missing required header '{0}'")]
    MissingHeader(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Body(err) => err.status_code(),
            ApiError::MissingHeader(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();

        if status.is_server_error() {
            error!(%status, "Request failed: {}", self);
        } else {
            warn!(%status, "Request rejected: {}", self);
        }

        HandlerResponse::new(status)
            .message(self.to_string())
            .into_response()
    }
}

/// Maps errors raised by the layer stack to envelope responses
pub async fn handle_global_error(err: BoxError) -> HandlerResponse {
    // 408 if the request took too long
    if err.is::<Elapsed>() || find_cause::<Elapsed>(&*err).is_some() {
        warn!("Request timed out");
        return HandlerResponse::new(StatusCode::REQUEST_TIMEOUT).message("Request timeout");
    }

    // Otherwise, 500
    error!("Unhandled internal error: {}", err);
    HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
        .message(format!("Unhandled internal error: {}", err))
}

/// 404 for routes that do not exist
pub async fn fallback_handler() -> HandlerResponse {
    HandlerResponse::new(StatusCode::NOT_FOUND).message("The requested route does not exist")
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_errors_keep_their_status() {
        let err: ApiError = BodyError::PayloadTooLarge { limit: 1 }.into();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let err: ApiError = BodyError::UnsupportedMediaType("text/plain".into()).into();
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = BodyError::Decode(decode).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: ApiError = BodyError::Read("reset".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_header_is_a_client_error() {
        let err = ApiError::MissingHeader("host");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "missing required header 'host'");
    }

    #[tokio::test]
    async fn timeouts_map_to_408() {
        let err: BoxError = Box::new(Elapsed::new());
        let response = handle_global_error(err).await;
        assert_eq!(response.status_code, StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn other_layer_errors_map_to_500() {
        let err: BoxError = "boom".into();
        let response = handle_global_error(err).await;
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
