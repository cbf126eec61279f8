// Application state shared by every handler

use std::sync::Arc;

use crate::body::{BodyReader, BodyWriter, JsonCodec};
use crate::config::environment::EnvironmentVariables;

/// Immutable per-process state, cloned into each request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub codec: JsonCodec,
    pub reader: BodyReader,
    pub writer: BodyWriter,
}

impl AppState {
    /// Builds the body pipeline from configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        let codec: JsonCodec = JsonCodec::new().with_pretty(environment.json_pretty);
        let reader: BodyReader = BodyReader::new(
            environment.max_request_body_size,
            environment.default_charset,
        );
        let writer: BodyWriter = BodyWriter::new(codec);

        Self {
            environment: Arc::new(environment),
            codec,
            reader,
            writer,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EnvironmentVariables::default())
    }
}
