use async_trait::async_trait;

use crate::{
    error::{Result, TtsError},
    provider::TtsProvider,
    types::{Catalog, SynthesisRequest, SynthesisResult},
    voices::VoiceAliases,
};

/// Converts summary text into speech and lists what the provider offers
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `request`, falling back across model variants
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult>;

    /// Query the voice and model catalogs concurrently
    async fn catalog(&self) -> Result<Catalog>;
}

/// Synthesizer that resolves voice aliases and walks an ordered model list
pub struct Synthesizer {
    provider: Box<dyn TtsProvider>,
    aliases: VoiceAliases,
    models: Vec<String>,
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("provider", &self.provider.name())
            .field("aliases", &self.aliases.len())
            .field("models", &self.models)
            .finish()
    }
}

impl Synthesizer {
    pub fn new(provider: Box<dyn TtsProvider>, aliases: VoiceAliases, models: Vec<String>) -> Result<Self> {
        if models.is_empty() {
            return Err(TtsError::ConfigError("at least one synthesis model is required".to_string()));
        }

        tracing::debug!(
            provider = provider.name(),
            models = ?models,
            "speech synthesizer initialized"
        );

        Ok(Self {
            provider,
            aliases,
            models,
        })
    }

    /// Provider voice ID for an alias or raw ID
    pub fn resolve_voice<'a>(&'a self, voice: &'a str) -> &'a str {
        self.aliases.resolve(voice)
    }
}

#[async_trait]
impl SpeechSynthesizer for Synthesizer {
    /// Tries each model strictly in list order, one at a time; the first
    /// success wins and later models are never called.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        if request.text.trim().is_empty() {
            return Err(TtsError::InvalidRequest("text must not be empty".to_string()));
        }

        let voice = request.voice.trim();
        if voice.is_empty() {
            return Err(TtsError::InvalidRequest("voice must not be empty".to_string()));
        }

        let voice_id = self.resolve_voice(voice);
        let mut last_error = None;

        for (attempt, model) in self.models.iter().enumerate() {
            match self.provider.synthesize(voice_id, &request.text, model).await {
                Ok(audio) => {
                    tracing::info!(
                        provider = self.provider.name(),
                        %model,
                        voice_id,
                        attempt = attempt + 1,
                        bytes = audio.len(),
                        "speech synthesized"
                    );

                    return Ok(SynthesisResult {
                        audio,
                        voice_id: voice_id.to_string(),
                        model: model.clone(),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        provider = self.provider.name(),
                        %model,
                        attempt = attempt + 1,
                        error = %e,
                        "speech model failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        let Some(last) = last_error else {
            return Err(TtsError::ConfigError("no synthesis models configured".to_string()));
        };

        Err(TtsError::AllModelsFailed {
            attempts: self.models.len(),
            last: Box::new(last),
        })
    }

    async fn catalog(&self) -> Result<Catalog> {
        let (voices, models) = tokio::join!(self.provider.list_voices(), self.provider.list_models());

        match (voices, models) {
            (Ok(voices), Ok(models)) => Ok(Catalog { voices, models }),
            (Ok(voices), Err(e)) => {
                tracing::warn!(error = %e, "model catalog query failed, returning voices only");
                Ok(Catalog {
                    voices,
                    models: Vec::new(),
                })
            }
            (Err(e), Ok(models)) => {
                tracing::warn!(error = %e, "voice catalog query failed, returning models only");
                Ok(Catalog {
                    voices: Vec::new(),
                    models,
                })
            }
            (Err(voices), Err(models)) => Err(TtsError::CatalogUnavailable {
                voices: Box::new(voices),
                models: Box::new(models),
            }),
        }
    }
}
