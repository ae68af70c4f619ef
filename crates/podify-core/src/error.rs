use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by the pipeline's error type. The server layer turns these
/// into actual HTTP responses, keeping adapter errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// JSON body sent back to the caller
    fn error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.client_message(),
        }
    }
}

/// Error payload returned by every Podify endpoint: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
