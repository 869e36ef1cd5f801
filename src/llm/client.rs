//! Chat completions client (OpenAI-compatible, Groq by default).
//!
//! One non-streaming POST per call. Every failure mode is reported as a
//! `RemoteError`; the generator turns all of them into fallback synthesis.

use super::prompts::{MAX_TOKENS, TEMPERATURE};
use crate::config::GeneratorConfig;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("no API key configured")]
    MissingKey,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Malformed(String),

    #[error("response contained no text")]
    Empty,
}

/// Thin wrapper over `reqwest::Client` bound to one endpoint and model.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(config: &GeneratorConfig) -> Self {
        let http = match reqwest::Client::builder().timeout(config.timeout).build() {
            Ok(client) => client,
            Err(e) => {
                log::warn!("[LLM] Could not build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            }
        };
        Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// JSON body for a single user-role message.
    pub fn request_body(&self, prompt: &str) -> Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        })
    }

    /// Send `prompt` and return the trimmed completion text.
    pub async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        let api_key = self.api_key.as_deref().ok_or(RemoteError::MissingKey)?;

        log::info!("[LLM] Model: {}", self.model);
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .bearer_auth(api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::info!("[LLM] Response {} in {}ms", status, start.elapsed().as_millis());

        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        extract_content(&body)
    }
}

/// Pull `choices[0].message.content` out of a response body.
pub fn extract_content(body: &str) -> Result<String, RemoteError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| RemoteError::Malformed(e.to_string()))?;
    let content = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| RemoteError::Malformed("missing choices[0].message.content".to_string()))?;

    let content = content.trim();
    if content.is_empty() {
        return Err(RemoteError::Empty);
    }
    Ok(content.to_string())
}
