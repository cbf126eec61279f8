//! tests/common/mod.rs
//! A shared test helper to spawn the Axum app on an ephemeral port.

#![allow(dead_code)]

use axum::{serve, Router};
use message_body_api::config::{environment::EnvironmentVariables, state::AppState};
use message_body_api::core::{logging::init_tracing, server::create_app};
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app with default configuration and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(EnvironmentVariables::default())
}

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app_with(env: EnvironmentVariables) -> String {
    init_tracing();

    // * Build the application the same way main() does.
    let app: Router = create_app(AppState::new(env));

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

/// POSTs `body` with the given content type.
pub async fn post(url: &str, content_type: Option<&str>, body: impl Into<reqwest::Body>) -> reqwest::Response {
    let mut request: reqwest::RequestBuilder = reqwest::Client::new().post(url).body(body);
    if let Some(content_type) = content_type {
        request = request.header(reqwest::header::CONTENT_TYPE, content_type);
    }
    request.send().await.expect("Failed to execute request.")
}

pub async fn get(url: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(url)
        .send()
        .await
        .expect("Failed to execute request.")
}
