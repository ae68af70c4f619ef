use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use podify_core::HttpError;
use podify_llm::LlmError;
use podify_tts::TtsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PodifyError>;

/// Failures surfaced by the `/podify` endpoint
#[derive(Debug, Error)]
pub enum PodifyError {
    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    /// Request body is not declared as JSON
    #[error("Unsupported Content-Type, expected: 'Content-Type: application/json'")]
    UnsupportedMediaType,

    /// Request body exceeds the configured limit
    #[error("Request body is too large, limit is {0} bytes")]
    PayloadTooLarge(usize),

    /// The summarization call failed or returned nothing usable
    #[error("summarization failed: {0}")]
    Summarize(#[source] LlmError),

    /// Every synthesis model variant failed
    #[error("speech synthesis failed: {0}")]
    Synthesize(#[source] TtsError),

    /// Neither catalog query succeeded
    #[error("catalog query failed: {0}")]
    Catalog(#[source] TtsError),
}

impl PodifyError {
    /// Whether the failure came from a downstream provider
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Summarize(_) | Self::Synthesize(_) | Self::Catalog(_))
    }
}

impl HttpError for PodifyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Summarize(_) | Self::Synthesize(_) | Self::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Provider details stay in the logs; callers only learn which stage failed
    fn client_message(&self) -> String {
        match self {
            Self::Summarize(_) => "failed to summarize text".to_string(),
            Self::Synthesize(_) => "failed to synthesize speech".to_string(),
            Self::Catalog(_) => "failed to list speech catalog".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for PodifyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_upstream() {
            tracing::error!(error = %self, "podify request failed upstream");
        } else {
            tracing::debug!(error = %self, "podify request rejected");
        }

        (status, Json(self.error_body())).into_response()
    }
}
