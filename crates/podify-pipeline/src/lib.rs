//! The `/podify` endpoint: summarize text, voice the summary, return both.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod pipeline;
mod request;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use podify_llm::OpenAiSummarizer;
use podify_tts::Catalog;

pub use error::{PodifyError, Result};
pub use pipeline::Pipeline;
pub use request::{BODY_LIMIT_BYTES, ExtractPayload};
pub use types::{PodifyRequest, PodifyResponse};

/// Build the pipeline and both adapters from configuration
pub fn build_pipeline(config: &podify_config::Config) -> anyhow::Result<Arc<Pipeline>> {
    let summarizer = OpenAiSummarizer::new(&config.llm)
        .map_err(|e| anyhow::anyhow!("Failed to initialize summarizer: {e}"))?;

    let synthesizer = podify_tts::build_synthesizer(&config.tts)
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech synthesizer: {e}"))?;

    Ok(Arc::new(Pipeline::new(Arc::new(summarizer), Arc::new(synthesizer))))
}

/// Create the endpoint router for `/podify`
pub fn endpoint_router() -> Router<Arc<Pipeline>> {
    Router::new().route("/podify", post(podify).get(catalog))
}

/// Handle summarize-and-synthesize requests
async fn podify(
    State(pipeline): State<Arc<Pipeline>>,
    ExtractPayload(request): ExtractPayload<PodifyRequest>,
) -> Result<Json<PodifyResponse>> {
    tracing::debug!(
        voice = request.voice.as_deref().unwrap_or_default(),
        input_len = request.text.as_ref().map_or(0, String::len),
        "podify handler called"
    );

    let response = pipeline.podify(request).await?;

    Ok(Json(response))
}

/// Handle catalog listing requests
async fn catalog(State(pipeline): State<Arc<Pipeline>>) -> Result<Json<Catalog>> {
    let catalog = pipeline.catalog().await?;

    tracing::debug!(
        voices = catalog.voices.len(),
        models = catalog.models.len(),
        "catalog listed"
    );

    Ok(Json(catalog))
}
