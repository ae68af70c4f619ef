use std::collections::BTreeMap;

use async_trait::async_trait;
use podify_config::{TtsConfig, VoiceSettingsConfig};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use super::TtsProvider;
use crate::{
    error::{Result, TtsError},
    types::{AUDIO_MPEG, ModelInfo, ModelLanguage, VoiceInfo},
};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` TTS provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    voice_settings: VoiceSettingsConfig,
}

impl ElevenLabsProvider {
    pub fn new(config: &TtsConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TtsError::ConfigError("API key required for ElevenLabs".to_string()))?;

        let client = podify_core::build_http_client(config.timeout)
            .map_err(|e| TtsError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        let base_url = match &config.base_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_ELEVENLABS_API_URL)
                .map_err(|e| TtsError::ConfigError(format!("invalid ElevenLabs URL: {e}")))?,
        };

        if base_url.cannot_be_a_base() {
            return Err(TtsError::ConfigError(format!("{base_url} cannot be used as a base URL")));
        }

        Ok(Self {
            client,
            base_url,
            api_key,
            voice_settings: config.voice_settings,
        })
    }

    /// Append `segments` to the base URL, percent-encoding each one as a single path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TtsError::ConfigError(format!("{} cannot be used as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(&[path])?;

        let response = self
            .client
            .get(url.clone())
            .header("xi-api-key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%url, "ElevenLabs catalog request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("failed to parse {path} response: {e}")))
    }
}

#[derive(Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
}

#[derive(Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Vec<WireVoice>,
}

#[derive(Deserialize)]
struct WireVoice {
    voice_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    labels: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct WireModel {
    model_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    can_do_text_to_speech: bool,
    #[serde(default)]
    languages: Vec<WireLanguage>,
}

#[derive(Deserialize)]
struct WireLanguage {
    language_id: String,
    #[serde(default)]
    name: Option<String>,
}

impl From<WireVoice> for VoiceInfo {
    fn from(voice: WireVoice) -> Self {
        Self {
            name: voice.name.unwrap_or_else(|| voice.voice_id.clone()),
            voice_id: voice.voice_id,
            category: voice.category,
            preview_url: voice.preview_url,
            labels: voice
                .labels
                .into_iter()
                .filter_map(|(key, value)| match value {
                    serde_json::Value::String(s) => Some((key, s)),
                    _ => None,
                })
                .collect(),
        }
    }
}

impl From<WireModel> for ModelInfo {
    fn from(model: WireModel) -> Self {
        Self {
            name: model.name.unwrap_or_else(|| model.model_id.clone()),
            model_id: model.model_id,
            description: model.description.filter(|d| !d.is_empty()),
            can_do_text_to_speech: model.can_do_text_to_speech,
            languages: model
                .languages
                .into_iter()
                .map(|lang| ModelLanguage {
                    name: lang.name.unwrap_or_else(|| lang.language_id.clone()),
                    language_id: lang.language_id,
                })
                .collect(),
        }
    }
}

/// Map a non-success response into the matching error
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

    tracing::error!("ElevenLabs API error ({status}): {error_text}");

    Err(match status.as_u16() {
        401 => TtsError::AuthenticationFailed(error_text),
        400 | 422 => TtsError::InvalidRequest(error_text),
        _ => TtsError::ProviderApiError {
            status: status.as_u16(),
            message: error_text,
        },
    })
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(&self, voice_id: &str, text: &str, model: &str) -> Result<Vec<u8>> {
        if matches!(voice_id, "." | "..") {
            return Err(TtsError::InvalidRequest(format!("invalid voice ID: {voice_id}")));
        }

        let url = self.endpoint(&["text-to-speech", voice_id])?;

        tracing::debug!(
            "ElevenLabs TTS request: model={model}, voice={voice_id}, input_len={}",
            text.len(),
        );

        let body = ElevenLabsRequest {
            text,
            model_id: model,
            voice_settings: VoiceSettings {
                stability: self.voice_settings.stability,
                similarity_boost: self.voice_settings.similarity_boost,
            },
        };

        let response = self
            .client
            .post(url)
            .header("xi-api-key", self.api_key.expose_secret())
            .header(http::header::ACCEPT, AUDIO_MPEG)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let response = check_status(response).await?;

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            TtsError::ConnectionError(format!("Failed to read ElevenLabs audio stream: {e}"))
        })?;

        if audio.is_empty() {
            return Err(TtsError::InvalidResponse("ElevenLabs returned an empty audio body".to_string()));
        }

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(audio.to_vec())
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>> {
        let response: VoicesResponse = self.get_json("voices").await?;
        Ok(response.voices.into_iter().map(VoiceInfo::from).collect())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let models: Vec<WireModel> = self.get_json("models").await?;
        Ok(models.into_iter().map(ModelInfo::from).collect())
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
