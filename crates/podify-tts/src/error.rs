use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Invalid request parameters
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider rejected the API key
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider API returned a non-success status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network, timeout, or connection error
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// The provider answered 2xx with an unusable payload
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// Every configured model variant failed; carries the last failure
    #[error("all {attempts} model variant(s) failed, last error: {last}")]
    AllModelsFailed { attempts: usize, last: Box<TtsError> },

    /// Both catalog queries failed
    #[error("catalog unavailable: voices: {voices}; models: {models}")]
    CatalogUnavailable { voices: Box<TtsError>, models: Box<TtsError> },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}
