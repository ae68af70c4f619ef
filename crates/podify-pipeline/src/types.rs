use serde::{Deserialize, Serialize};

/// Body of `POST /podify`
///
/// `text` and `voice` are optional at the wire level so that a missing field
/// is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodifyRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl PodifyRequest {
    pub fn new(text: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            voice: Some(voice.into()),
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Successful `POST /podify` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodifyResponse {
    pub summary: String,
    /// Base64 (standard alphabet, padded) MPEG audio
    pub audio_data: String,
}
