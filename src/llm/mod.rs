//! LLM integration for TalentScout.
//!
//! The assistant talks to a single hosted backend (Groq) through the
//! provider-agnostic `LlmProvider` trait, so tests can substitute a fake
//! collaborator without touching the network or the environment.

pub mod groq;
pub mod provider;

pub use groq::GroqProvider;
pub use provider::*;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::LlmError;

/// Create the Groq-backed provider from configuration.
pub fn create_provider(config: &AppConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider = GroqProvider::new(
        config.api_key.clone(),
        config.model.clone(),
        config.request_timeout,
    )?;
    tracing::info!("Using Groq (model: {})", config.model);
    Ok(Arc::new(provider))
}
