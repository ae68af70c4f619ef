use axum::body::Body;
use serde::de::DeserializeOwned;

use crate::error::PodifyError;

/// Extractor for JSON request bodies that rejects with `{ "error": ... }`
pub struct ExtractPayload<T>(pub T);

/// Body limit for podify requests (1 MiB)
pub const BODY_LIMIT_BYTES: usize = 1 << 20;

fn is_json(value: &http::HeaderValue) -> bool {
    value
        .to_str()
        .ok()
        .and_then(|raw| raw.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
{
    type Rejection = PodifyError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !parts.headers.get(http::header::CONTENT_TYPE).is_some_and(is_json) {
            return Err(PodifyError::UnsupportedMediaType);
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                PodifyError::PayloadTooLarge(BODY_LIMIT_BYTES)
            } else {
                PodifyError::Validation(format!("Failed to read request body: {err}"))
            }
        })?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(|e| PodifyError::Validation(format!("Failed to parse request body: {e}")))
    }
}
