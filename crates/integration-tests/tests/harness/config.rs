//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::time::Duration;

use podify_config::{Config, CorsConfig, HealthConfig, LlmConfig, ServerConfig, TtsConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder whose providers point at the given mock backends
    pub fn new(openai_base_url: &str, elevenlabs_base_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                llm: LlmConfig {
                    api_key: Some(SecretString::from("sk-test")),
                    base_url: Some(openai_base_url.parse().expect("valid URL")),
                    timeout: Duration::from_secs(5),
                    ..LlmConfig::default()
                },
                tts: TtsConfig {
                    api_key: Some(SecretString::from("xi-test")),
                    base_url: Some(elevenlabs_base_url.parse().expect("valid URL")),
                    timeout: Duration::from_secs(5),
                    ..TtsConfig::default()
                },
                telemetry: None,
            },
        }
    }

    /// Replace the ordered synthesis model list
    pub fn with_models(mut self, models: &[&str]) -> Self {
        self.config.tts.models = models.iter().map(|m| (*m).to_string()).collect();
        self
    }

    /// Add or override a voice alias
    pub fn with_voice(mut self, alias: &str, voice_id: &str) -> Self {
        self.config.tts.voices.insert(alias.to_string(), voice_id.to_string());
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
