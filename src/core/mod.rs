// Start of file: /src/core/mod.rs

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
