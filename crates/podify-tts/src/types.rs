use serde::{Deserialize, Serialize};

/// Content type of every synthesized payload
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Summary text to voice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    /// Voice alias (e.g. "Rachel") or raw provider voice ID
    pub voice: String,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: voice.into(),
        }
    }
}

/// Synthesized audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    /// Raw MPEG audio bytes; never empty
    pub audio: Vec<u8>,
    /// Provider voice ID the alias resolved to
    pub voice_id: String,
    /// Model variant that produced the audio
    pub model: String,
}

impl SynthesisResult {
    pub const fn content_type(&self) -> &'static str {
        AUDIO_MPEG
    }
}

/// Voice listed by the provider catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInfo {
    pub voice_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub labels: std::collections::BTreeMap<String, String>,
}

/// Synthesis model listed by the provider catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub model_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub can_do_text_to_speech: bool,
    #[serde(default)]
    pub languages: Vec<ModelLanguage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelLanguage {
    pub language_id: String,
    pub name: String,
}

/// Voices and models available from the provider
///
/// A list is empty when its query failed and the other one succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub voices: Vec<VoiceInfo>,
    pub models: Vec<ModelInfo>,
}
