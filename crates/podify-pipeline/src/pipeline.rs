use std::sync::{Arc, OnceLock};

use base64::{Engine, engine::general_purpose::STANDARD};
use podify_llm::{SummarizationRequest, Summarizer};
use podify_tts::{Catalog, SpeechSynthesizer, SynthesisRequest};
use regex::Regex;
use tracing::Instrument;

use crate::{
    error::{PodifyError, Result},
    types::{PodifyRequest, PodifyResponse},
};

/// Summarize-then-synthesize orchestrator shared by every request
pub struct Pipeline {
    summarizer: Arc<dyn Summarizer>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

/// Request fields after validation
struct Validated {
    text: String,
    voice: String,
    language: Option<String>,
}

impl Pipeline {
    pub fn new(summarizer: Arc<dyn Summarizer>, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            summarizer,
            synthesizer,
        }
    }

    /// Run `Summarizing -> Synthesizing -> Done`, stopping at the first failure
    ///
    /// Nothing downstream is called unless the request validates, and the
    /// synthesizer is never called unless summarization produced text.
    pub async fn podify(&self, request: PodifyRequest) -> Result<PodifyResponse> {
        let Validated { text, voice, language } = validate(request)?;

        let mut summarization = SummarizationRequest::new(text);
        if let Some(language) = language {
            summarization = summarization.with_language(language);
        }

        let summary = self
            .summarizer
            .summarize(&summarization)
            .instrument(tracing::info_span!("summarize", provider = self.summarizer.name()))
            .await
            .map_err(|e| {
                tracing::warn!(stage = "summarizing", error = %e, "pipeline stopped");
                PodifyError::Summarize(e)
            })?;

        let speech = self
            .synthesizer
            .synthesize(&SynthesisRequest::new(summary.summary.clone(), voice))
            .instrument(tracing::info_span!("synthesize"))
            .await
            .map_err(|e| {
                tracing::warn!(stage = "synthesizing", error = %e, "pipeline stopped");
                PodifyError::Synthesize(e)
            })?;

        tracing::info!(
            summary_model = %summary.model,
            speech_model = %speech.model,
            voice_id = %speech.voice_id,
            audio_bytes = speech.audio.len(),
            "podify complete"
        );

        Ok(PodifyResponse {
            summary: summary.summary,
            audio_data: STANDARD.encode(&speech.audio),
        })
    }

    /// Voices and models offered by the speech provider
    pub async fn catalog(&self) -> Result<Catalog> {
        self.synthesizer
            .catalog()
            .instrument(tracing::info_span!("catalog"))
            .await
            .map_err(PodifyError::Catalog)
    }
}

/// BCP 47 shaped tag: a 2-3 letter primary subtag plus optional subtags
fn language_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("language tag pattern is valid"))
}

fn validate(request: PodifyRequest) -> Result<Validated> {
    let text = request
        .text
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| PodifyError::Validation("text is required".to_string()))?;

    let voice = request
        .voice
        .map(|voice| voice.trim().to_string())
        .filter(|voice| !voice.is_empty())
        .ok_or_else(|| PodifyError::Validation("voice is required".to_string()))?;

    let language = request
        .language
        .map(|language| language.trim().to_string())
        .filter(|language| !language.is_empty());

    if let Some(language) = &language
        && !language_tag().is_match(language)
    {
        return Err(PodifyError::Validation(
            "language must be a language tag such as \"en\" or \"pt-BR\"".to_string(),
        ));
    }

    Ok(Validated { text, voice, language })
}
