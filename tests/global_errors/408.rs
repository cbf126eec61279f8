//! tests/global_errors/408.rs
//! Ensures that a request whose body never finishes arriving results in a 408.

#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use message_body_api::config::environment::EnvironmentVariables;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_the_body_stalls() {
    let env: EnvironmentVariables = EnvironmentVariables {
        default_timeout_seconds: 1,
        ..EnvironmentVariables::default()
    };
    let base_url: String = common::spawn_app_with(env);
    let addr: &str = base_url.trim_start_matches("http://");

    // Promise ten bytes, send three, then wait.
    let mut stream: TcpStream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(
            b"POST /request-body-string-v4 HTTP/1.1\r\n\
              Host: localhost\r\n\
              Content-Type: text/plain\r\n\
              Content-Length: 10\r\n\
              \r\n\
              abc",
        )
        .await
        .unwrap();

    let mut buf: Vec<u8> = vec![0; 1024];
    let read: usize = timeout(Duration::from_secs(5), stream.read(&mut buf))
        .await
        .expect("Client timed out waiting for server.")
        .unwrap();

    let head: String = String::from_utf8_lossy(&buf[..read]).into_owned();
    assert!(head.starts_with("HTTP/1.1 408"), "unexpected response: {head}");
    assert!(head.contains("REQUEST_TIMEOUT"), "unexpected response: {head}");
}
