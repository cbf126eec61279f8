// Start of file: /src/body/reader.rs

/*
    * Body Reader: drains the request stream into a buffer and decodes it
    * with a charset. The stream is always read to the end (or until the
    * size limit trips) before anything is returned.
*/

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use mime::Mime;
use tracing::debug;

use super::{BodyError, Charset};
use crate::utils::error_handler::find_cause;

#[derive(Clone, Debug)]
pub struct BodyReader {
    limit: usize,
    default_charset: Charset,
}

impl BodyReader {
    pub fn new(limit: usize, default_charset: Charset) -> Self {
        Self { limit, default_charset }
    }

    /// Buffers the whole body, failing once more than `limit` bytes arrive.
    pub async fn read_bytes(&self, body: Body) -> Result<Bytes, BodyError> {
        match Limited::new(body, self.limit).collect().await {
            Ok(collected) => {
                let bytes: Bytes = collected.to_bytes();
                debug!("Read request body of {} bytes", bytes.len());
                Ok(bytes)
            }
            Err(err) if err.is::<LengthLimitError>()
                || find_cause::<LengthLimitError>(&*err).is_some() =>
            {
                Err(BodyError::PayloadTooLarge { limit: self.limit })
            }
            Err(err) => Err(BodyError::Read(err.to_string())),
        }
    }

    /// Reads the body as text using the charset declared in `Content-Type`,
    /// or the configured default when none is declared.
    pub async fn read_text(&self, headers: &HeaderMap, body: Body) -> Result<String, BodyError> {
        let charset: Charset = self.charset_for(headers)?;
        self.read_text_with(body, charset).await
    }

    /// Reads the body as text with an explicit charset, ignoring headers.
    pub async fn read_text_with(&self, body: Body, charset: Charset) -> Result<String, BodyError> {
        let bytes: Bytes = self.read_bytes(body).await?;
        charset.decode(&bytes)
    }

    pub fn charset_for(&self, headers: &HeaderMap) -> Result<Charset, BodyError> {
        let declared = content_type(headers)?
            .and_then(|mime| mime.get_param(mime::CHARSET).map(|name| name.as_str().to_owned()));

        match declared {
            Some(label) => {
                Charset::from_label(&label).ok_or(BodyError::UnsupportedCharset(label))
            }
            None => Ok(self.default_charset),
        }
    }
}

/// Parses the `Content-Type` header, if any.
pub fn content_type(headers: &HeaderMap) -> Result<Option<Mime>, BodyError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Ok(None);
    };

    let raw: &str = value
        .to_str()
        .map_err(|_| BodyError::UnsupportedMediaType(String::from_utf8_lossy(value.as_bytes()).into_owned()))?;

    raw.parse::<Mime>()
        .map(Some)
        .map_err(|_| BodyError::UnsupportedMediaType(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn reader(limit: usize) -> BodyReader {
        BodyReader::new(limit, Charset::Utf8)
    }

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[tokio::test]
    async fn drains_every_chunk_of_a_streamed_body() {
        let chunks = vec![
            Ok::<_, std::io::Error>(Bytes::from_static(b"{\"username\":")),
            Ok(Bytes::from_static(b"\"hello\",")),
            Ok(Bytes::from_static(b"\"age\":20}")),
        ];
        let body = Body::from_stream(futures::stream::iter(chunks));

        let text = reader(1024).read_text(&HeaderMap::new(), body).await.unwrap();

        assert_eq!(text, r#"{"username":"hello","age":20}"#);
    }

    #[tokio::test]
    async fn empty_body_reads_as_empty_string() {
        let text = reader(16).read_text(&HeaderMap::new(), Body::empty()).await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn body_over_the_limit_is_rejected() {
        let err = reader(4).read_bytes(Body::from("too long")).await.unwrap_err();
        assert!(matches!(err, BodyError::PayloadTooLarge { limit: 4 }));
    }

    #[tokio::test]
    async fn stream_errors_surface_as_read_failures() {
        let chunks = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
        ];
        let body = Body::from_stream(futures::stream::iter(chunks));

        let err = reader(1024).read_bytes(body).await.unwrap_err();
        assert!(matches!(err, BodyError::Read(_)));
    }

    #[tokio::test]
    async fn declared_charset_is_used() {
        let headers = with_content_type("text/plain; charset=ISO-8859-1");
        let text = reader(16)
            .read_text(&headers, Body::from(vec![0x63u8, 0x61, 0x66, 0xe9]))
            .await
            .unwrap();
        assert_eq!(text, "café");
    }

    #[tokio::test]
    async fn explicit_charset_ignores_headers() {
        let headers = with_content_type("text/plain; charset=ISO-8859-1");
        let r = reader(16);
        assert_eq!(r.charset_for(&headers).unwrap(), Charset::Latin1);

        let err = r
            .read_text_with(Body::from(vec![0xe9u8]), Charset::Utf8)
            .await
            .unwrap_err();
        assert!(matches!(err, BodyError::InvalidEncoding { charset: "UTF-8" }));
    }

    #[test]
    fn unknown_charset_is_unsupported() {
        let headers = with_content_type("text/plain; charset=x-klingon");
        let err = reader(16).charset_for(&headers).unwrap_err();
        assert!(matches!(err, BodyError::UnsupportedCharset(ref c) if c == "x-klingon"));
    }

    #[test]
    fn missing_content_type_uses_default_charset() {
        let r = BodyReader::new(16, Charset::Latin1);
        assert_eq!(r.charset_for(&HeaderMap::new()).unwrap(), Charset::Latin1);
        assert_eq!(r.charset_for(&with_content_type("application/json")).unwrap(), Charset::Latin1);
    }

    #[test]
    fn garbage_content_type_is_unsupported() {
        assert!(matches!(
            content_type(&with_content_type("not a media type")),
            Err(BodyError::UnsupportedMediaType(_))
        ));
    }
}

// End of file: /src/body/reader.rs
