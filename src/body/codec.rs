// Start of file: /src/body/codec.rs

// * JSON mapper. Built once from configuration, stored in AppState and
// * handed to the decoder and the writer; there is no global instance.

use serde::{de::DeserializeOwned, Serialize};

use super::BodyError;

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    // * Two-space indented output instead of compact
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Decodes `text` into `T`. Either the whole value decodes or nothing does.
    pub fn read_value<T: DeserializeOwned>(&self, text: &str) -> Result<T, BodyError> {
        serde_json::from_str(text).map_err(BodyError::Decode)
    }

    pub fn write_value<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, BodyError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };

        encoded.map_err(BodyError::Encode)
    }
}


// End of file: /src/body/codec.rs
