mod harness;

use harness::config::ConfigBuilder;
use harness::mock_elevenlabs::{MockElevenLabs, MockElevenLabsBuilder};
use harness::mock_openai::MockOpenAi;
use harness::server::TestServer;
use serde_json::{Value, json};

async fn fetch_catalog(elevenlabs: MockElevenLabsBuilder) -> (u16, Value) {
    let openai = MockOpenAi::start_with_summary("summary").await.unwrap();
    let elevenlabs = elevenlabs.start().await.unwrap();
    let config = ConfigBuilder::new(&openai.base_url(), &elevenlabs.base_url()).build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/podify")).send().await.unwrap();
    let status = resp.status().as_u16();

    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn lists_voices_and_models() {
    let (status, body) = fetch_catalog(MockElevenLabs::builder()).await;

    assert_eq!(status, 200);
    assert_eq!(body["voices"].as_array().unwrap().len(), 2);
    assert_eq!(body["voices"][0]["voiceId"], "21m00Tcm4TlvDq8ikWAM");
    assert_eq!(body["voices"][0]["name"], "Rachel");
    assert_eq!(body["voices"][0]["labels"]["accent"], "american");
    assert_eq!(body["models"][0]["modelId"], "eleven_multilingual_v2");
    assert_eq!(body["models"][0]["canDoTextToSpeech"], true);
    assert_eq!(body["models"][0]["languages"][1]["languageId"], "hi");
}

#[tokio::test]
async fn failed_voice_query_degrades() {
    let (status, body) = fetch_catalog(MockElevenLabs::builder().failing_voices()).await;

    assert_eq!(status, 200);
    assert_eq!(body["voices"], json!([]));
    assert_eq!(body["models"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn failed_model_query_degrades() {
    let (status, body) = fetch_catalog(MockElevenLabs::builder().failing_models_catalog()).await;

    assert_eq!(status, 200);
    assert_eq!(body["voices"].as_array().unwrap().len(), 2);
    assert_eq!(body["models"], json!([]));
}

#[tokio::test]
async fn both_queries_failing_is_a_server_error() {
    let (status, body) = fetch_catalog(MockElevenLabs::builder().failing_voices().failing_models_catalog()).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "failed to list speech catalog" }));
}
