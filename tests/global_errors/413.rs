//! tests/global_errors/413.rs
//! Ensures that a payload larger than the configured limit triggers 413.

#[path = "../common/mod.rs"]
mod common;

use message_body_api::config::environment::EnvironmentVariables;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_limit() {
    let env: EnvironmentVariables = EnvironmentVariables {
        max_request_body_size: 64,
        ..EnvironmentVariables::default()
    };
    let base_url: String = common::spawn_app_with(env);

    // Generate a payload larger than the limit.
    let oversized_payload: Vec<u8> = vec![b'X'; 64 + 100];

    for path in ["request-body-string-v1", "request-body-string-v4", "request-body-json-v3"] {
        let resp: reqwest::Response = common::post(
            &format!("{}/{}", base_url, path),
            Some("application/json"),
            oversized_payload.clone(),
        )
        .await;

        // Expect a 413 Payload Too Large response.
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE, "{path}");

        let body: String = resp.text().await.unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "PAYLOAD_TOO_LARGE");
        assert_eq!(json["code"], 413);
    }
}

#[tokio::test]
async fn payload_at_the_limit_is_accepted() {
    let env: EnvironmentVariables = EnvironmentVariables {
        max_request_body_size: 64,
        ..EnvironmentVariables::default()
    };
    let base_url: String = common::spawn_app_with(env);

    let resp: reqwest::Response = common::post(
        &format!("{}/request-body-string-v4", base_url),
        Some("text/plain"),
        vec![b'X'; 64],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
}
