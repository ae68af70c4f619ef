use std::time::Duration;

use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech synthesis provider configuration (`ElevenLabs`)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// `xi-api-key` credential; required
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (defaults to `https://api.elevenlabs.io/v1`)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model variants tried in order until one succeeds
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Extra voice aliases (name to provider voice ID), layered over the built-in table
    #[serde(default)]
    pub voices: IndexMap<String, String>,
    /// Voice settings sent with every synthesis request
    #[serde(default)]
    pub voice_settings: VoiceSettingsConfig,
    /// Timeout for a single provider call (e.g. "120s")
    #[serde(default = "default_timeout", deserialize_with = "crate::duration::deserialize")]
    pub timeout: Duration,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            models: default_models(),
            voices: IndexMap::new(),
            voice_settings: VoiceSettingsConfig::default(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceSettingsConfig {
    #[serde(default = "default_half")]
    pub stability: f64,
    #[serde(default = "default_half")]
    pub similarity_boost: f64,
}

impl Default for VoiceSettingsConfig {
    fn default() -> Self {
        Self {
            stability: default_half(),
            similarity_boost: default_half(),
        }
    }
}

/// Default model fallback order
pub fn default_models() -> Vec<String> {
    ["eleven_multilingual_v2", "eleven_turbo_v2_5", "eleven_monolingual_v1"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

const fn default_half() -> f64 {
    0.5
}

const fn default_timeout() -> Duration {
    Duration::from_secs(120)
}
