//! Speech synthesis adapter for Podify
//!
//! Turns summary text into MPEG audio through the `ElevenLabs` API, trying an
//! ordered list of model variants until one succeeds, and exposes the
//! provider's voice and model catalogs.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod synthesizer;
mod types;
mod voices;

pub use error::{Result, TtsError};
pub use provider::{TtsProvider, elevenlabs::ElevenLabsProvider};
pub use synthesizer::{SpeechSynthesizer, Synthesizer};
pub use types::{AUDIO_MPEG, Catalog, ModelInfo, ModelLanguage, SynthesisRequest, SynthesisResult, VoiceInfo};
pub use voices::{VoiceAliases, builtin_aliases};

/// Build the `ElevenLabs`-backed synthesizer from configuration
pub fn build_synthesizer(config: &podify_config::TtsConfig) -> Result<Synthesizer> {
    let provider = ElevenLabsProvider::new(config)?;
    let aliases = VoiceAliases::with_overrides(&config.voices);

    Synthesizer::new(Box::new(provider), aliases, config.models.clone())
}
