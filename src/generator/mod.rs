//! Review generator: cache → remote → fallback.
//!
//! `ReviewGenerator` is an explicitly constructed service holding the
//! cache store, the clock and the chat client. It never returns an error:
//! every remote failure is logged and converted into fallback synthesis, and
//! the `Generated` variant tells the caller which path produced the text.

pub mod cache;
pub mod fallback;

pub use cache::{CacheStore, Clock, FileCacheStore, MemoryCacheStore, SystemClock};

use crate::config::GeneratorConfig;
use crate::llm::prompts::build_review_prompt;
use crate::llm::{ChatClient, GenerationRequest, Generated};
use rand::Rng;

pub struct ReviewGenerator {
    client: ChatClient,
    cache: Box<dyn CacheStore>,
    clock: Box<dyn Clock>,
}

impl ReviewGenerator {
    pub fn new(config: &GeneratorConfig, cache: Box<dyn CacheStore>) -> Self {
        Self::with_clock(config, cache, Box::new(SystemClock))
    }

    pub fn with_clock(
        config: &GeneratorConfig,
        cache: Box<dyn CacheStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            client: ChatClient::new(config),
            cache,
            clock,
        }
    }

    /// Produce a new review template for `request`.
    pub async fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Generated {
        let key = request.cache_key();

        if let Some(text) = cache::read_fresh(&*self.cache, &key, self.clock.now_ms()) {
            log::info!("[GENERATE] Cache hit for {}", key);
            return Generated::Cached(text);
        }

        if !self.client.has_credential() {
            log::warn!("[GENERATE] No API key configured, using fallback template");
        } else {
            let prompt = build_review_prompt(request);
            match self.client.complete(&prompt).await {
                Ok(text) => {
                    if let Err(e) =
                        cache::write_entry(&*self.cache, &key, &text, self.clock.now_ms())
                    {
                        log::warn!("[CACHE] Failed to store {}: {}", key, e);
                    }
                    log::info!("[GENERATE] Remote template: {} chars", text.len());
                    return Generated::Remote(text);
                }
                Err(e) => {
                    log::error!("[GENERATE] Remote generation failed: {}", e);
                }
            }
        }

        let text = fallback::synthesize(&request.business_name, request.business_type, rng);
        log::info!("[GENERATE] Fallback template: {} chars", text.len());
        Generated::Fallback(text)
    }
}
