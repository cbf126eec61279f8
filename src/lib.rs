// Library root for the message body demonstration API

pub mod api;
pub mod body;
pub mod config;
pub mod core;
pub mod models;
pub mod request;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
