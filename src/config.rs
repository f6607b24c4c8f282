//! Widget configuration.
//!
//! Values are resolved from build-time environment variables so the SSR host
//! and the WASM bundle agree on them without a round-trip. Every key is
//! optional; defaults reproduce the stock coach page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ASK_ENDPOINT: &str = "/chat/ask";
pub const DEFAULT_FALLBACK_TEXT: &str = "Sorry, there was an error connecting to the coach.";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Ask your coach a question...";

pub const ASK_ENDPOINT_KEY: &str = "CHAT_ASK_ENDPOINT";
pub const FALLBACK_TEXT_KEY: &str = "CHAT_FALLBACK_TEXT";
pub const INPUT_PLACEHOLDER_KEY: &str = "CHAT_INPUT_PLACEHOLDER";

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be an absolute path or http(s) URL, got {value:?}")]
    InvalidEndpoint { key: &'static str, value: String },
    #[error("{key} must not be blank")]
    Blank { key: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Endpoint receiving the form-encoded `question`.
    pub endpoint: String,
    /// Bot message shown when the request or its body fails.
    pub fallback_text: String,
    pub placeholder: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ASK_ENDPOINT.to_owned(),
            fallback_text: DEFAULT_FALLBACK_TEXT.to_owned(),
            placeholder: DEFAULT_INPUT_PLACEHOLDER.to_owned(),
        }
    }
}

impl ChatConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional:
    /// - `CHAT_ASK_ENDPOINT`: default `/chat/ask`
    /// - `CHAT_FALLBACK_TEXT`: default coach apology
    /// - `CHAT_INPUT_PLACEHOLDER`: default input hint
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a provided value is blank or the endpoint
    /// is neither an absolute path nor an `http(s)` URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = match lookup(ASK_ENDPOINT_KEY) {
            Some(raw) => parse_endpoint(&raw)?,
            None => DEFAULT_ASK_ENDPOINT.to_owned(),
        };
        let fallback_text = non_blank(FALLBACK_TEXT_KEY, lookup(FALLBACK_TEXT_KEY), DEFAULT_FALLBACK_TEXT)?;
        let placeholder = non_blank(INPUT_PLACEHOLDER_KEY, lookup(INPUT_PLACEHOLDER_KEY), DEFAULT_INPUT_PLACEHOLDER)?;

        Ok(Self { endpoint, fallback_text, placeholder })
    }

    /// Config baked in at compile time.
    ///
    /// # Errors
    ///
    /// Same as [`ChatConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                ASK_ENDPOINT_KEY => option_env!("CHAT_ASK_ENDPOINT"),
                FALLBACK_TEXT_KEY => option_env!("CHAT_FALLBACK_TEXT"),
                INPUT_PLACEHOLDER_KEY => option_env!("CHAT_INPUT_PLACEHOLDER"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Blank { key: ASK_ENDPOINT_KEY });
    }
    if trimmed.starts_with('/') || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(trimmed.to_owned());
    }
    Err(ConfigError::InvalidEndpoint { key: ASK_ENDPOINT_KEY, value: raw.to_owned() })
}

fn non_blank(key: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    match raw {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Blank { key }),
        Some(value) => Ok(value),
        None => Ok(default.to_owned()),
    }
}
