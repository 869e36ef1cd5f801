//! LLM domain: remote review generation.
//!
//! External code should only use what is exported here:
//!   - types.rs    : GenerationRequest + Generated outcome
//!   - prompts.rs  : prompt construction and sampling constants
//!   - client.rs   : chat completions HTTP client
//!   - provider.rs : provider identity, env var names, keychain service

pub mod client;
pub mod prompts;
pub mod provider;
pub mod types;

pub use client::{ChatClient, RemoteError};
pub use types::{GenerationRequest, Generated};
