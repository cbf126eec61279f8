// Start of file: /src/body/writer.rs

/*
    * Body Writer: serializes a string or record and builds the full
    * response, with status 200 unless the entity says otherwise.
*/

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::Response,
};

use super::{BodyError, JsonCodec};

const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";
const APPLICATION_JSON: &str = "application/json";

/// A serialized body and the media type it was written as.
#[derive(Debug, Clone)]
pub struct Encoded {
    pub content_type: HeaderValue,
    pub bytes: Bytes,
}

impl Encoded {
    pub fn text(bytes: impl Into<Bytes>) -> Self {
        Self {
            content_type: HeaderValue::from_static(TEXT_PLAIN_UTF_8),
            bytes: bytes.into(),
        }
    }

    pub fn json(bytes: impl Into<Bytes>) -> Self {
        Self {
            content_type: HeaderValue::from_static(APPLICATION_JSON),
            bytes: bytes.into(),
        }
    }
}

pub trait EncodeBody {
    fn encode_body(&self, codec: &JsonCodec) -> Result<Encoded, BodyError>;
}

// Strings are written verbatim, never JSON-quoted.
impl EncodeBody for str {
    fn encode_body(&self, _codec: &JsonCodec) -> Result<Encoded, BodyError> {
        Ok(Encoded::text(Bytes::copy_from_slice(self.as_bytes())))
    }
}

impl EncodeBody for String {
    fn encode_body(&self, codec: &JsonCodec) -> Result<Encoded, BodyError> {
        self.as_str().encode_body(codec)
    }
}

impl<T: EncodeBody + ?Sized> EncodeBody for &T {
    fn encode_body(&self, codec: &JsonCodec) -> Result<Encoded, BodyError> {
        (**self).encode_body(codec)
    }
}

/// A response body together with its status and extra headers.
#[derive(Debug, Clone)]
pub struct ResponseEntity<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: T,
}

impl<T> ResponseEntity<T> {
    pub fn new(body: T, status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    pub fn ok(body: T) -> Self {
        Self::new(body, StatusCode::OK)
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[derive(Clone, Debug)]
pub struct BodyWriter {
    codec: JsonCodec,
}

impl BodyWriter {
    pub fn new(codec: JsonCodec) -> Self {
        Self { codec }
    }

    /// Writes `body` with status 200 and no extra headers.
    pub fn write_body<T: EncodeBody>(&self, body: T) -> Result<Response, BodyError> {
        self.write(ResponseEntity::ok(body))
    }

    /// Headers set on the entity replace the writer's `Content-Type`.
    pub fn write<T: EncodeBody>(&self, entity: ResponseEntity<T>) -> Result<Response, BodyError> {
        let ResponseEntity { status, headers, body } = entity;
        let Encoded { content_type, bytes } = body.encode_body(&self.codec)?;

        let mut response: Response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        response.headers_mut().insert(CONTENT_TYPE, content_type);
        response.headers_mut().extend(headers);

        Ok(response)
    }
}


// End of file: /src/body/writer.rs
