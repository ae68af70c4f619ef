use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Summarization provider configuration
///
/// Points at an OpenAI-compatible chat completion API.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// Bearer token for the provider
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (defaults to `https://api.openai.com/v1`)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Completion model used for summaries
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Upper bound on generated tokens
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Timeout for a single completion call (e.g. "60s")
    #[serde(default = "default_timeout", deserialize_with = "crate::duration::deserialize")]
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            temperature: None,
            max_tokens: None,
            timeout: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

const fn default_timeout() -> Duration {
    Duration::from_secs(60)
}
