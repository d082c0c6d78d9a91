use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::{build_api_url, DEFAULT_TIMEOUT_SECS};

/// Instruction template for meeting summaries. The transcript replaces
/// the `{transcript}` marker; the model's reply is stored verbatim.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Faça o resumo do texto delimitado por ####
O texto é a transcrição de uma reunião.
O resumo deve contar com os principais assuntos abordados durante a reunião.
O resumo deve ter no máximo 400 caracteres.
O resumo deve estar em texto corrido.
No final, deve ser apresentado todos acordos e combinados feitos durante a reunião no formato de bullet points.
Se houver perguntas durante a reunião separe as perguntas e respostas com bullet points, se não houver perguntas não retorne nada referente as perguntas.

O formato final que eu desejo é:
Resumo reunião:
- escrever aqui o resumo.

Perguntas:
- Pergunta 1\n Resposta 1
- Pergunta 2\n Resposta 2
- Pergunta n\n Resposta n

Acordos da Reunião:
- Acordo 1
- Acordo 2
- Acordo n

texto: ####{transcript}####
";

/// Fill the transcript into the summary instruction template.
pub fn render_summary_prompt(transcript: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE.replace("{transcript}", transcript)
}

/// Summarization collaborator: transcript text in, formatted summary out.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(base_url: &str, api_key: String, model: String) -> Result<Self> {
        let api_url = build_api_url(base_url, "/v1/chat/completions")?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        info!("Requesting summary via {}", self.api_url);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: render_summary_prompt(transcript),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .context("Failed to send summary request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Chat API error ({status}): {error_text}");
        }

        let resp: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat response")?;

        let content = resp
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("Chat response contained no content")?;

        Ok(content)
    }
}
