// Start of file: /src/models/hello_data.rs

/*
    * The two-field record exchanged by the JSON endpoints.
    * Field declaration order is the serialized key order.
*/

use serde::{Deserialize, Serialize};

use crate::body::{decoder::is_json, BodyError, DecodeBody, EncodeBody, Encoded, JsonCodec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloData {
    pub username: String,
    pub age: i32,
}

impl HelloData {
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: username.into(),
            age,
        }
    }
}

impl DecodeBody for HelloData {
    fn accepts(media_type: Option<&mime::Mime>) -> bool {
        is_json(media_type)
    }

    fn decode_body(text: String, codec: &JsonCodec) -> Result<Self, BodyError> {
        codec.read_value(&text)
    }
}

impl EncodeBody for HelloData {
    fn encode_body(&self, codec: &JsonCodec) -> Result<Encoded, BodyError> {
        codec.write_value(self).map(Encoded::json)
    }
}

// End of file: /src/models/hello_data.rs
