#![allow(clippy::must_use_candidate)]

pub mod cors;
mod duration;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod telemetry;
pub mod tts;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use llm::*;
pub use server::*;
pub use telemetry::*;
pub use tts::*;

/// Top-level Podify configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Summarization (chat completion) provider
    #[serde(default)]
    pub llm: LlmConfig,
    /// Speech synthesis provider
    #[serde(default)]
    pub tts: TtsConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
