// Start of file: /src/body/decoder.rs

/*
    * Body Decoder: every body shape a handler can ask for implements
    * `DecodeBody`, so the decoding strategy is picked by the type the
    * handler names, at compile time.
*/

use mime::Mime;

use super::{BodyError, JsonCodec};

pub trait DecodeBody: Sized {
    /// Whether a body with this media type can be decoded into `Self`.
    /// `None` means the request carried no `Content-Type`.
    fn accepts(_media_type: Option<&Mime>) -> bool {
        true
    }

    fn decode_body(text: String, codec: &JsonCodec) -> Result<Self, BodyError>;
}

// Opaque string: passed through untouched.
impl DecodeBody for String {
    fn decode_body(text: String, _codec: &JsonCodec) -> Result<Self, BodyError> {
        Ok(text)
    }
}

/// `application/json`, any `application/*+json`, or no declared type.
pub fn is_json(media_type: Option<&Mime>) -> bool {
    match media_type {
        None => true,
        Some(mime) => {
            mime.type_() == mime::APPLICATION
                && (mime.subtype() == mime::JSON || mime.suffix().is_some_and(|s| s == mime::JSON))
        }
    }
}


// End of file: /src/body/decoder.rs
