pub mod elevenlabs;

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{ModelInfo, VoiceInfo},
};

/// A single-attempt text-to-speech backend
///
/// Implementations make exactly one downstream call per method; retry and
/// model fallback live in [`crate::Synthesizer`].
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize `text` with one voice and one model, returning MPEG bytes
    async fn synthesize(&self, voice_id: &str, text: &str, model: &str) -> Result<Vec<u8>>;

    /// List the voices available to this account
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>>;

    /// List the synthesis models
    async fn list_models(&self) -> Result<Vec<ModelInfo>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
