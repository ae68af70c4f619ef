use async_trait::async_trait;
use podify_config::LlmConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::{LlmError, Result},
    protocol::{ChatMessage, ChatRequest, ChatResponse},
    types::{SummarizationRequest, SummarizationResult},
};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed instruction sent as the system message of every completion
pub const SYSTEM_PROMPT: &str = "You are a podcast summarizer. Generate a concise and engaging summary of the given text \
     that would work well as a podcast episode. Keep it natural and conversational.";

/// Condenses text into a podcast summary
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Issue exactly one completion call for `request`
    async fn summarize(&self, request: &SummarizationRequest) -> Result<SummarizationResult>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

/// Summarizer backed by an OpenAI-compatible chat completion endpoint
pub struct OpenAiSummarizer {
    client: Client,
    completions_url: String,
    api_key: Option<SecretString>,
    model: String,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
}

impl OpenAiSummarizer {
    /// Build the adapter from its configuration section
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = podify_core::build_http_client(config.timeout)
            .map_err(|e| LlmError::Config(format!("failed to build HTTP client: {e}")))?;

        let base = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_BASE_URL, url::Url::as_str)
            .trim_end_matches('/');

        Ok(Self {
            client,
            completions_url: format!("{base}/chat/completions"),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn chat_request(&self, request: &SummarizationRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt(request.language.as_deref())),
                ChatMessage::user(request.text.clone()),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, request: &SummarizationRequest) -> Result<SummarizationResult> {
        if request.text.trim().is_empty() {
            return Err(LlmError::InvalidRequest("text must not be empty".to_string()));
        }

        tracing::debug!(
            model = %self.model,
            input_len = request.text.len(),
            language = request.language.as_deref().unwrap_or("-"),
            "sending summarization request"
        );

        let mut builder = self.client.post(&self.completions_url).json(&self.chat_request(request));

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "summarization request failed");
            LlmError::Connection(e.to_string())
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(%status, "summarization provider returned error");
            return Err(LlmError::ProviderApi {
                status: status.as_u16(),
                message: body,
            });
        }

        let wire: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let result = extract_summary(wire, &self.model)?;

        tracing::debug!(model = %result.model, summary_len = result.summary.len(), "summarization complete");

        Ok(result)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Build the system prompt, asking for a specific output language when one is given
pub(crate) fn system_prompt(language: Option<&str>) -> String {
    match language.map(str::trim).filter(|tag| !tag.is_empty()) {
        Some(tag) => format!("{SYSTEM_PROMPT} Write the summary in the language identified by the tag \"{tag}\"."),
        None => SYSTEM_PROMPT.to_string(),
    }
}

/// Take the first choice's message text, rejecting missing or blank content
pub(crate) fn extract_summary(response: ChatResponse, requested_model: &str) -> Result<SummarizationResult> {
    let first = response.choices.into_iter().next().ok_or(LlmError::NoChoices)?;

    let summary = first
        .message
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(LlmError::EmptySummary)?;

    Ok(SummarizationResult {
        summary,
        model: response.model.unwrap_or_else(|| requested_model.to_string()),
    })
}
