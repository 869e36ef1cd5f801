//! Remote provider metadata.
//!
//! Only one provider is wired up (Groq's OpenAI-compatible chat completions
//! endpoint), but its identity, env var names and keychain entry live here so
//! the settings module and the CLI agree on them.

use serde::{Deserialize, Serialize};

/// Keychain service name for stored API keys.
pub const KEYRING_SERVICE: &str = "review-launcher";

/// Provider metadata shown by `key test` and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    /// Env vars checked for the key, in priority order.
    pub env_keys: Vec<String>,
}

pub fn groq() -> ProviderInfo {
    ProviderInfo {
        id: "groq".to_string(),
        name: "Groq (llama-3.1-8b-instant)".to_string(),
        env_keys: vec!["GROQ_API_KEY".to_string(), "VITE_GROQ_API_KEY".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groq_checks_primary_key_first() {
        let p = groq();
        assert_eq!(p.id, "groq");
        assert_eq!(p.env_keys[0], "GROQ_API_KEY");
    }
}
