use thiserror::Error;

pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors raised by the summarization adapter
#[derive(Debug, Error)]
pub enum LlmError {
    /// The request was rejected before reaching the provider
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider could not be reached or timed out
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    ProviderApi { status: u16, message: String },

    /// The provider answered 2xx with a body that could not be decoded
    #[error("failed to parse provider response: {0}")]
    InvalidResponse(String),

    /// The completion carried no choices
    #[error("provider returned no choices")]
    NoChoices,

    /// The first choice had no usable text
    #[error("provider returned an empty summary")]
    EmptySummary,

    /// Adapter construction failed
    #[error("configuration error: {0}")]
    Config(String),
}
