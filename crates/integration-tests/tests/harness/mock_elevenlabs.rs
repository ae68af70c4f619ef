//! Mock ElevenLabs backend for integration tests
//!
//! Serves text-to-speech plus the voice and model catalogs, with switches to
//! fail individual models or either catalog query

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Bytes returned for every successful synthesis
pub const MOCK_AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x01];

/// A synthesis call as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCall {
    pub voice_id: String,
    pub model_id: String,
    pub text: String,
    pub api_key: Option<String>,
}

/// Mock speech backend
pub struct MockElevenLabs {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    failing_models: HashSet<String>,
    fail_voices: bool,
    fail_models: bool,
    calls: Mutex<Vec<SpeechCall>>,
}

/// Builder for the mock's failure switches
#[derive(Default)]
pub struct MockElevenLabsBuilder {
    state: MockState,
}

impl MockElevenLabsBuilder {
    /// Answer 500 for synthesis with `model`
    pub fn failing_model(mut self, model: &str) -> Self {
        self.state.failing_models.insert(model.to_string());
        self
    }

    /// Answer 500 for `GET /voices`
    pub fn failing_voices(mut self) -> Self {
        self.state.fail_voices = true;
        self
    }

    /// Answer 500 for `GET /models`
    pub fn failing_models_catalog(mut self) -> Self {
        self.state.fail_models = true;
        self
    }

    pub async fn start(self) -> anyhow::Result<MockElevenLabs> {
        let state = Arc::new(self.state);

        let app = Router::new()
            .route("/v1/text-to-speech/{voice_id}", routing::post(handle_speech))
            .route("/v1/voices", routing::get(handle_voices))
            .route("/v1/models", routing::get(handle_models))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(MockElevenLabs { addr, shutdown, state })
    }
}

impl MockElevenLabs {
    pub fn builder() -> MockElevenLabsBuilder {
        MockElevenLabsBuilder::default()
    }

    /// Start a mock where every model and catalog query succeeds
    pub async fn start() -> anyhow::Result<Self> {
        Self::builder().start().await
    }

    /// Base URL for configuring the mock as the speech provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Synthesis calls in the order they arrived
    pub fn calls(&self) -> Vec<SpeechCall> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Model IDs attempted, in order
    pub fn attempted_models(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.model_id).collect()
    }
}

impl Drop for MockElevenLabs {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech(
    State(state): State<Arc<MockState>>,
    Path(voice_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let call = SpeechCall {
        voice_id,
        model_id: body["model_id"].as_str().unwrap_or_default().to_string(),
        text: body["text"].as_str().unwrap_or_default().to_string(),
        api_key: headers
            .get("xi-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    let failing = state.failing_models.contains(&call.model_id);
    let model_id = call.model_id.clone();
    state.calls.lock().unwrap().push(call);

    if failing {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": { "status": "model_unavailable", "message": format!("{model_id} is unavailable") } })),
        )
            .into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], MOCK_AUDIO.to_vec()).into_response()
}

async fn handle_voices(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    if state.fail_voices {
        return (StatusCode::INTERNAL_SERVER_ERROR, "voices unavailable").into_response();
    }

    Json(json!({
        "voices": [
            {
                "voice_id": "21m00Tcm4TlvDq8ikWAM",
                "name": "Rachel",
                "category": "premade",
                "labels": { "accent": "american", "gender": "female" }
            },
            {
                "voice_id": "pNInz6obpgDQGcFmaJgB",
                "name": "Adam",
                "category": "premade",
                "labels": { "accent": "american", "gender": "male" }
            }
        ]
    }))
    .into_response()
}

async fn handle_models(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    if state.fail_models {
        return (StatusCode::INTERNAL_SERVER_ERROR, "models unavailable").into_response();
    }

    Json(json!([
        {
            "model_id": "eleven_multilingual_v2",
            "name": "Eleven Multilingual v2",
            "can_do_text_to_speech": true,
            "languages": [{ "language_id": "en", "name": "English" }, { "language_id": "hi", "name": "Hindi" }]
        },
        {
            "model_id": "eleven_turbo_v2_5",
            "name": "Eleven Turbo v2.5",
            "can_do_text_to_speech": true,
            "languages": [{ "language_id": "en", "name": "English" }]
        }
    ]))
    .into_response()
}
