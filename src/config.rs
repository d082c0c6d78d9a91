use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    pub api: ApiConfig,
    pub capture: CaptureSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the per-subject session tree
    pub root: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the OpenAI-compatible API (e.g. "https://api.openai.com")
    pub base_url: String,
    /// Speech-to-text model (e.g. "whisper-1")
    pub transcribe_model: String,
    /// Chat model used for summaries (e.g. "gpt-4o-mini")
    pub chat_model: String,
    /// Transcription language hint (e.g. "pt")
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct CaptureSettings {
    /// Seconds of audio accumulated between transcription calls
    pub chunk_interval_secs: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
