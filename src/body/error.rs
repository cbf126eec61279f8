use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the reader, decoder and writer stages.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body exceeds the limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    Read(String),

    #[error("unsupported charset '{0}'")]
    UnsupportedCharset(String),

    #[error("unsupported media type '{0}'")]
    UnsupportedMediaType(String),

    #[error("request body is not valid {charset}")]
    InvalidEncoding { charset: &'static str },

    #[error("malformed JSON body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to serialize response body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl BodyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BodyError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            BodyError::UnsupportedCharset(_) | BodyError::UnsupportedMediaType(_) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            BodyError::InvalidEncoding { .. } | BodyError::Decode(_) => StatusCode::BAD_REQUEST,
            BodyError::Read(_) | BodyError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
