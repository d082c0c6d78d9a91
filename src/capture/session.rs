use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep, timeout, Instant};
use tracing::{info, warn};

use crate::api::Transcriber;
use crate::audio::{AudioBuffer, AudioFrame};
use crate::store::{FileStore, SessionPaths};

/// Configuration for a capture session
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Subject ("patient") the session belongs to
    pub subject: String,

    /// Wall-clock time between transcription calls
    /// Default: 5 seconds
    pub chunk_interval: Duration,

    /// Bounded wait for the next audio frame before yielding
    pub poll_timeout: Duration,

    /// Pause after an empty poll before retrying
    pub idle_backoff: Duration,

    /// Sample rate of incoming frames
    pub sample_rate: u32,

    /// Channel count of incoming frames
    pub channels: u16,
}

impl CaptureConfig {
    pub fn new(subject: impl Into<String>, sample_rate: u32, channels: u16) -> Self {
        Self {
            subject: subject.into(),
            chunk_interval: Duration::from_secs(5),
            poll_timeout: Duration::from_secs(1),
            idle_backoff: Duration::from_millis(100),
            sample_rate,
            channels,
        }
    }
}

/// Final statistics for a completed capture session
#[derive(Debug, Clone, Serialize)]
pub struct CaptureStats {
    /// Session identifier (timestamp directory name)
    pub session_id: String,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// Audio captured, in seconds
    pub audio_secs: f64,

    /// Number of chunks sent for transcription
    pub chunks_transcribed: usize,

    /// Length of the accumulated transcript, in characters
    pub transcript_chars: usize,
}

/// One recording session: a session directory plus the capture loop state.
pub struct CaptureSession {
    store: FileStore,
    transcriber: Arc<dyn Transcriber>,
    config: CaptureConfig,
    paths: SessionPaths,
    started_at: DateTime<Utc>,
}

impl CaptureSession {
    /// Create the session directory and prepare the loop. The directory
    /// timestamp is assigned here and never changes.
    pub fn new(
        store: FileStore,
        transcriber: Arc<dyn Transcriber>,
        config: CaptureConfig,
    ) -> Result<Self> {
        let paths = store.create_session(&config.subject)?;

        info!(
            "Capture session {} created for subject {}",
            paths.id(),
            config.subject
        );

        Ok(Self {
            store,
            transcriber,
            config,
            paths,
            started_at: Utc::now(),
        })
    }

    pub fn session_id(&self) -> &str {
        self.paths.id()
    }

    pub fn paths(&self) -> &SessionPaths {
        &self.paths
    }

    /// Run the capture loop until the audio source disconnects.
    ///
    /// Each received frame goes into both the cumulative buffer (flushed
    /// to the full-audio file after every update) and the rolling chunk.
    /// Once `chunk_interval` has elapsed since the last transcription,
    /// the chunk is exported, transcribed, appended to the transcript
    /// file, and reset. A failed transcription or file write ends the
    /// session with an error; whatever was persisted stays on disk.
    pub async fn run(self, mut frames: mpsc::Receiver<AudioFrame>) -> Result<CaptureStats> {
        info!("Capture loop started for session {}", self.paths.id());

        let mut full = AudioBuffer::new(self.config.sample_rate, self.config.channels);
        let mut chunk = AudioBuffer::new(self.config.sample_rate, self.config.channels);
        let mut transcript = String::new();
        let mut chunks_transcribed = 0usize;
        let mut last_transcription = Instant::now();

        loop {
            match timeout(self.config.poll_timeout, frames.recv()).await {
                Ok(Some(frame)) => {
                    full.push(&frame);
                    chunk.push(&frame);

                    full.write_wav(&self.paths.audio())?;

                    let interval_elapsed =
                        last_transcription.elapsed() >= self.config.chunk_interval;
                    if !chunk.is_empty() && interval_elapsed {
                        last_transcription = Instant::now();
                        chunks_transcribed += 1;

                        let text = self.transcribe_chunk(&chunk).await?;
                        transcript.push_str(&text);

                        self.store
                            .write_text(&self.paths.transcript(), &transcript)?;

                        chunk.clear();
                    }
                }
                // Source disconnected: recording is over
                Ok(None) => break,
                // No frames within the bounded wait: yield and retry
                Err(_) => {
                    sleep(self.config.idle_backoff).await;
                }
            }
        }

        if !chunk.is_empty() {
            warn!(
                "Session {} ended with {:.1}s of untranscribed audio in the rolling chunk",
                self.paths.id(),
                chunk.duration_secs()
            );
        }

        info!(
            "Capture loop finished for session {}: {:.1}s audio, {} chunks transcribed",
            self.paths.id(),
            full.duration_secs(),
            chunks_transcribed
        );

        Ok(CaptureStats {
            session_id: self.paths.id().to_string(),
            started_at: self.started_at,
            audio_secs: full.duration_secs(),
            chunks_transcribed,
            transcript_chars: transcript.chars().count(),
        })
    }

    /// Export the rolling chunk to the temp file and transcribe it.
    async fn transcribe_chunk(&self, chunk: &AudioBuffer) -> Result<String> {
        let chunk_path = self.paths.chunk();
        chunk.write_wav(&chunk_path)?;

        let audio_wav = fs::read(&chunk_path)
            .with_context(|| format!("Failed to read chunk export: {}", chunk_path.display()))?;

        info!(
            "Transcribing chunk for session {} ({:.1}s of audio)",
            self.paths.id(),
            chunk.duration_secs()
        );

        self.transcriber.transcribe(audio_wav).await
    }
}
