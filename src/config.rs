//! Build-time application configuration.
//!
//! The site is a static bundle, so configuration is read from the build
//! environment (`option_env!`) rather than at runtime:
//!
//! - `LCBAD_BASE_PATH`: deployment prefix, e.g. `/LCBAD` for the hosted build (default: none)
//! - `LCBAD_SESSION_CHECK_DELAY_MS`: simulated auth round trip (default 300)
//! - `LCBAD_SESSION_TIMEOUT_MS`: give up on a session check after this long (default 8000)
//! - `LCBAD_ASSISTANT_REPLY_DELAY_MS`: assistant "thinking" delay (default 1000)
//! - `LCBAD_CHAT_CONNECT_DELAY_MS`: anonymous identity generation delay (default 1000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SESSION_CHECK_DELAY_MS: u64 = 300;
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 8_000;
pub const DEFAULT_ASSISTANT_REPLY_DELAY_MS: u64 = 1_000;
pub const DEFAULT_CHAT_CONNECT_DELAY_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidMillis { var: String, value: String },
    #[error("{var} must be an absolute path, got '{value}'")]
    InvalidPath { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Router base without a trailing slash; empty when served from `/`.
    pub base_path: String,
    pub session_check_delay_ms: u64,
    pub session_timeout_ms: u64,
    pub assistant_reply_delay_ms: u64,
    pub chat_connect_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            session_check_delay_ms: DEFAULT_SESSION_CHECK_DELAY_MS,
            session_timeout_ms: DEFAULT_SESSION_TIMEOUT_MS,
            assistant_reply_delay_ms: DEFAULT_ASSISTANT_REPLY_DELAY_MS,
            chat_connect_delay_ms: DEFAULT_CHAT_CONNECT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Config baked in at compile time. Invalid values fall back to defaults.
    pub fn from_build_env() -> Self {
        match Self::from_lookup(|name| build_var(name).map(str::to_owned)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for non-numeric delays or a relative base path.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_path: parse_base_path(lookup("LCBAD_BASE_PATH").as_deref())?,
            session_check_delay_ms: parse_millis(
                "LCBAD_SESSION_CHECK_DELAY_MS",
                lookup("LCBAD_SESSION_CHECK_DELAY_MS").as_deref(),
                DEFAULT_SESSION_CHECK_DELAY_MS,
            )?,
            session_timeout_ms: parse_millis(
                "LCBAD_SESSION_TIMEOUT_MS",
                lookup("LCBAD_SESSION_TIMEOUT_MS").as_deref(),
                DEFAULT_SESSION_TIMEOUT_MS,
            )?,
            assistant_reply_delay_ms: parse_millis(
                "LCBAD_ASSISTANT_REPLY_DELAY_MS",
                lookup("LCBAD_ASSISTANT_REPLY_DELAY_MS").as_deref(),
                DEFAULT_ASSISTANT_REPLY_DELAY_MS,
            )?,
            chat_connect_delay_ms: parse_millis(
                "LCBAD_CHAT_CONNECT_DELAY_MS",
                lookup("LCBAD_CHAT_CONNECT_DELAY_MS").as_deref(),
                DEFAULT_CHAT_CONNECT_DELAY_MS,
            )?,
        })
    }
}

fn build_var(name: &str) -> Option<&'static str> {
    match name {
        "LCBAD_BASE_PATH" => option_env!("LCBAD_BASE_PATH"),
        "LCBAD_SESSION_CHECK_DELAY_MS" => option_env!("LCBAD_SESSION_CHECK_DELAY_MS"),
        "LCBAD_SESSION_TIMEOUT_MS" => option_env!("LCBAD_SESSION_TIMEOUT_MS"),
        "LCBAD_ASSISTANT_REPLY_DELAY_MS" => option_env!("LCBAD_ASSISTANT_REPLY_DELAY_MS"),
        "LCBAD_CHAT_CONNECT_DELAY_MS" => option_env!("LCBAD_CHAT_CONNECT_DELAY_MS"),
        _ => None,
    }
}

fn parse_millis(var: &str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidMillis {
            var: var.to_owned(),
            value: value.to_owned(),
        }),
    }
}

fn parse_base_path(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() || value == "/" {
        return Ok(String::new());
    }
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidPath { var: "LCBAD_BASE_PATH".to_owned(), value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}
