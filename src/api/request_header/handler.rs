// Header inspection endpoint

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{HeaderMap, Method},
    response::Response,
};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::request::{cookie_value, header_multimap, required_header, Locale};
use crate::utils::error_handler::ApiError;

pub const COOKIE_NAME: &str = "myCookie";

/// Logs method, locale, every header, the host and an optional cookie
#[instrument(skip(state, headers))]
pub async fn headers_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    // A missing host fails the request before anything is logged
    let host: String = required_header(&headers, "host")?;
    let locale: Locale = Locale::resolve(&headers, &state.environment.default_locale);
    let header_map: BTreeMap<String, Vec<String>> = header_multimap(&headers);
    let cookie: Option<String> = cookie_value(&headers, COOKIE_NAME);

    info!("httpMethod={}", method);
    info!("locale={}", locale);
    info!("headerMap={:?}", header_map);
    info!("header host={}", host);
    info!("myCookie={:?}", cookie);

    Ok(state.writer.write_body("ok")?)
}
