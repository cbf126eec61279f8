// Start of file: /src/config/environment.rs

// * Environment configuration, loaded once at start-up and passed
// * explicitly into the application state.

use std::{borrow::Cow, collections::HashMap, path::Path};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::warn;

use crate::body::Charset;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds
const DEFAULT_LOCALE: &str = "en-US";

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub default_charset: Charset,
    pub default_locale: Cow<'static, str>,
    pub json_pretty: bool,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
            default_charset: Charset::Utf8,
            default_locale: Cow::Borrowed(DEFAULT_LOCALE),
            json_pretty: false,
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process and, outside
    // * production, from ./.env
    pub fn load() -> Result<Self> {
        Self::load_with(".env")
    }

    // * Same as `load`, reading the dotenv file at `dotenv_path`
    pub fn load_with(dotenv_path: impl AsRef<Path>) -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        // * dotenv never overrides variables already set in the process
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::from_path(dotenv_path.as_ref()).ok();
        }

        let vars: HashMap<String, String> = std::env::vars().collect();

        Self::from_map(&vars)
    }

    // * Builds the configuration from an explicit key/value map
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            default_charset: get_var("DEFAULT_CHARSET")
                .map(|s| {
                    Charset::from_label(s)
                        .with_context(|| format!("Unsupported DEFAULT_CHARSET '{s}'"))
                })
                .transpose()?
                .unwrap_or(Charset::Utf8),

            default_locale: get_var("DEFAULT_LOCALE")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_LOCALE)),

            json_pretty: get_var("JSON_PRETTY")
                .map(|s| s.parse().context("Invalid JSON_PRETTY (expected true/false)"))
                .transpose()?
                .unwrap_or(false),
        })
    }

    // * "host:port" for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}


// End of file: /src/config/environment.rs
