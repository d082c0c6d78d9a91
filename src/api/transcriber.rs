use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use super::{build_api_url, DEFAULT_TIMEOUT_SECS};

/// Speech-to-text collaborator: WAV bytes in, plain text out.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_wav: Vec<u8>) -> Result<String>;
}

/// Response shape shared by OpenAI-compatible transcription APIs
#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Client for an OpenAI-compatible `/v1/audio/transcriptions` endpoint.
///
/// Uploads a multipart form with `model`, `language` and `file` fields
/// and authenticates with a bearer token.
pub struct OpenAiTranscriber {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    language: String,
}

impl OpenAiTranscriber {
    pub fn new(base_url: &str, api_key: String, model: String, language: String) -> Result<Self> {
        let api_url = build_api_url(base_url, "/v1/audio/transcriptions")?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            language,
        })
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(&self, audio_wav: Vec<u8>) -> Result<String> {
        info!(
            "Transcribing {} bytes of audio via {}",
            audio_wav.len(),
            self.api_url
        );

        let form = reqwest::multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("response_format", "json")
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio_wav)
                    .file_name("audio.wav")
                    .mime_str("audio/wav")?,
            );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .context("Failed to send transcription request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Transcription API error ({status}): {error_text}");
        }

        let resp: TranscriptionResponse = response
            .json()
            .await
            .context("Failed to parse transcription response")?;

        Ok(resp.text)
    }
}
