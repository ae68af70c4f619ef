//! Mock OpenAI backend for integration tests
//!
//! Implements just enough of the chat completion API to drive the summarizer

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// What the mock answers every completion request with
#[derive(Clone)]
enum Behavior {
    Summary(String),
    NoChoices,
    Fail,
}

/// Mock chat completion backend with canned responses
pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    completion_count: AtomicU32,
    last_request: Mutex<Option<Value>>,
    behavior: Behavior,
}

impl MockOpenAi {
    /// Start a mock that answers with `summary`
    pub async fn start_with_summary(summary: &str) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Summary(summary.to_string())).await
    }

    /// Start a mock that returns an empty `choices` array
    pub async fn start_without_choices() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::NoChoices).await
    }

    /// Start a mock that fails every request with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Fail).await
    }

    async fn start_inner(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            completion_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
            behavior,
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
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

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the summarizer provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent completion request
    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);
    let model = body["model"].as_str().unwrap_or("mock").to_string();
    *state.last_request.lock().unwrap() = Some(body);

    match &state.behavior {
        Behavior::Summary(summary) => Json(json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "model": model,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": summary },
                "finish_reason": "stop"
            }]
        }))
        .into_response(),
        Behavior::NoChoices => Json(json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "model": model,
            "choices": []
        }))
        .into_response(),
        Behavior::Fail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "message": "mock summarizer failure", "type": "server_error" } })),
        )
            .into_response(),
    }
}
