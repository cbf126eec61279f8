// Start of file: /src/api/request_header/mod.rs

pub mod handler;
pub mod routes;

// End of file: /src/api/request_header/mod.rs
