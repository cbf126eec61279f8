// Start of file: /src/body/mod.rs

/*
    * Request/response body handling in three stages:
    * - reader: drains the request stream into text under a size limit
    * - decoder: turns that text into a typed value (string or record)
    * - writer: turns a typed value back into a response body
*/

pub mod charset;
pub mod codec;
pub mod decoder;
pub mod error;
pub mod extract;
pub mod reader;
pub mod writer;

pub use charset::Charset;
pub use codec::JsonCodec;
pub use decoder::DecodeBody;
pub use error::BodyError;
pub use extract::{HttpEntity, RequestBody};
pub use reader::BodyReader;
pub use writer::{BodyWriter, EncodeBody, Encoded, ResponseEntity};

// End of file: /src/body/mod.rs
