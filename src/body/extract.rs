// Start of file: /src/body/extract.rs

/*
    * Axum extractors that run the reader and decoder for a handler.
    * `RequestBody<T>` yields just the decoded body, `HttpEntity<T>` keeps
    * the request headers next to it.
*/

use axum::{
    body::Body,
    extract::{FromRef, FromRequest, Request},
    http::HeaderMap,
};
use mime::Mime;

use super::{reader::content_type, BodyError, DecodeBody};
use crate::config::state::AppState;
use crate::utils::error_handler::ApiError;

#[derive(Debug, Clone)]
pub struct RequestBody<T>(pub T);

#[derive(Debug, Clone)]
pub struct HttpEntity<T> {
    pub headers: HeaderMap,
    pub body: T,
}

impl<T> HttpEntity<T> {
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Checks the media type, reads the text and decodes it into `T`.
pub async fn decode_request<T: DecodeBody>(
    state: &AppState,
    headers: &HeaderMap,
    body: Body,
) -> Result<T, BodyError> {
    let media_type: Option<Mime> = content_type(headers)?;

    if !T::accepts(media_type.as_ref()) {
        let declared: String = media_type.map(|m| m.to_string()).unwrap_or_default();
        return Err(BodyError::UnsupportedMediaType(declared));
    }

    let text: String = state.reader.read_text(headers, body).await?;
    T::decode_body(text, &state.codec)
}

impl<S, T> FromRequest<S> for HttpEntity<T>
where
    T: DecodeBody + Send,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let state: AppState = AppState::from_ref(state);
        let (parts, body) = req.into_parts();

        let decoded: T = decode_request(&state, &parts.headers, body).await?;

        Ok(Self {
            headers: parts.headers,
            body: decoded,
        })
    }
}

impl<S, T> FromRequest<S> for RequestBody<T>
where
    T: DecodeBody + Send,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let entity: HttpEntity<T> = <HttpEntity<T> as FromRequest<S>>::from_request(req, state).await?;
        Ok(Self(entity.body))
    }
}

// End of file: /src/body/extract.rs
