// Start of file: /src/api/mod.rs

/*
    * HTTP endpoint groups. Each group has a `handler` module with the
    * request handlers and a `routes` module that registers them.
*/

pub mod request_body_json;
pub mod request_body_string;
pub mod request_header;
pub mod response_body;

// End of file: /src/api/mod.rs
