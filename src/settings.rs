//! API key resolution, storage and connection testing.
//!
//! Key lookup order:
//! 1. Provider env vars (`GROQ_API_KEY`, then `VITE_GROQ_API_KEY`)
//! 2. OS keychain entry `review-launcher` / `groq`
//!
//! A missing key is not an error anywhere in here: generation simply runs
//! on fallback synthesis.

use crate::config::GeneratorConfig;
use crate::error::{LauncherError, Result};
use crate::llm::provider::{self, ProviderInfo, KEYRING_SERVICE};

/// Find the API key for the active provider, if any.
pub fn resolve_api_key() -> Option<String> {
    let provider = provider::groq();
    resolve_with(&provider, |name| std::env::var(name).ok(), || {
        read_keychain(&provider.id)
    })
}

/// Resolution order with injectable lookups.
fn resolve_with(
    provider: &ProviderInfo,
    env: impl Fn(&str) -> Option<String>,
    keychain: impl FnOnce() -> Option<String>,
) -> Option<String> {
    for name in &provider.env_keys {
        if let Some(key) = env(name).filter(|k| !k.trim().is_empty()) {
            log::debug!("[SETTINGS] Using {} from environment", name);
            return Some(key.trim().to_string());
        }
    }

    let key = keychain().filter(|k| !k.trim().is_empty())?;
    log::info!("[SETTINGS] Loaded {} key from OS keychain", provider.id);
    Some(key.trim().to_string())
}

fn read_keychain(provider_id: &str) -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, provider_id).ok()?;
    match entry.get_password() {
        Ok(key) => Some(key),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            log::warn!("[SETTINGS] Keychain read failed: {}", e);
            None
        }
    }
}

/// Store `api_key` in the OS keychain for the active provider.
pub fn save_api_key(api_key: &str) -> Result<()> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(LauncherError::MissingApiKey);
    }

    let provider = provider::groq();
    let entry = keyring::Entry::new(KEYRING_SERVICE, &provider.id)
        .map_err(|e| LauncherError::Keyring(e.to_string()))?;
    entry
        .set_password(api_key)
        .map_err(|e| LauncherError::Keyring(format!("Failed to save key: {}", e)))?;

    log::info!("[SETTINGS] API key saved for provider: {}", provider.id);
    Ok(())
}

/// Send a minimal completion request and report whether the endpoint
/// answered with a success status.
pub async fn test_provider(config: &GeneratorConfig) -> Result<bool> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(LauncherError::MissingApiKey)?;

    let body = serde_json::json!({
        "model": config.model,
        "max_tokens": 5,
        "messages": [{"role": "user", "content": "Reply with just: ok"}]
    });

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    let resp = client
        .post(&config.endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    let ok = resp.status().is_success();
    log::info!(
        "[SETTINGS] Test {}: status {}",
        provider::groq().id,
        resp.status()
    );
    Ok(ok)
}
