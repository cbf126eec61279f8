// Start of file: /src/utils/utils.rs

// Small helpers shared by other modules.

use anyhow::{Context, Result};
use serde::Serialize;

// Two-space-indented JSON, used for readable log output.
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("value is not representable as JSON")
}

// End of file: /src/utils/utils.rs
