// Start of file: /src/api/response_body/mod.rs

pub mod handler;
pub mod routes;

// End of file: /src/api/response_body/mod.rs
