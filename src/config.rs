//! Runtime configuration read from the environment.
//!
//! `.env.local` / `.env` are loaded by `run()` before any of this is read,
//! so values may come from either the shell or those files.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Settings for the remote generation client.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    /// Bearer token. `None` routes every generation to fallback synthesis.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeneratorConfig {
    /// Read endpoint, model and timeout overrides from the environment.
    ///
    /// The API key is resolved separately (see `settings::resolve_api_key`)
    /// because it may live in the OS keychain.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_var("GROQ_API_URL") {
            config.endpoint = url;
        }
        if let Some(model) = non_empty_var("GROQ_MODEL") {
            config.model = model;
        }
        if let Some(raw) = non_empty_var("REVIEW_LAUNCHER_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "[CONFIG] Ignoring invalid REVIEW_LAUNCHER_TIMEOUT_SECS={:?}",
                    raw
                ),
            }
        }
        config
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }
}

/// Directory holding `templates.json` and `review-cache.json`.
///
/// Priority:
/// 1. REVIEW_LAUNCHER_HOME
/// 2. <config dir>/review-launcher
/// 3. ./review-launcher
pub fn data_dir() -> PathBuf {
    if let Some(home) = non_empty_var("REVIEW_LAUNCHER_HOME") {
        return PathBuf::from(home);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("review-launcher")
}

/// Public URL of the launcher, embedded in the share message.
pub fn share_url() -> Option<String> {
    non_empty_var("REVIEW_LAUNCHER_SHARE_URL")
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
