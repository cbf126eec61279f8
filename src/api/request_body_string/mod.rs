// Start of file: /src/api/request_body_string/mod.rs

pub mod handler;
pub mod routes;

// End of file: /src/api/request_body_string/mod.rs
