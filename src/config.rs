//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default Groq model. Overridable via `GROQ_MODEL`.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Required environment variable holding the Groq API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Optional environment variable overriding the model.
pub const MODEL_ENV: &str = "GROQ_MODEL";

/// Assistant configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API key (required).
    pub api_key: SecretString,
    /// Model identifier sent with each completion request.
    pub model: String,
    /// Timeout applied to each LLM HTTP request.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// A missing API key is fatal — the process must not serve a session
    /// without one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(API_KEY_ENV.to_string()))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: API_KEY_ENV.to_string(),
                message: "value is empty".to_string(),
            });
        }

        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            request_timeout: Duration::from_secs(30),
        })
    }
}
