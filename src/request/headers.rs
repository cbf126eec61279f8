use std::collections::BTreeMap;

use axum::http::HeaderMap;

use crate::utils::error_handler::ApiError;

/// Header name to every value sent for it. Names are sorted
/// alphabetically; values keep arrival order.
pub fn header_multimap(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    headers
        .keys()
        .map(|name| {
            let values: Vec<String> = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            (name.as_str().to_owned(), values)
        })
        .collect()
}

/// The first value of a header the handler cannot work without.
pub fn required_header(headers: &HeaderMap, name: &'static str) -> Result<String, ApiError> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .ok_or(ApiError::MissingHeader(name))
}
