use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use super::frame::AudioFrame;

/// Milliseconds of audio per delivered frame
const FRAME_DURATION_MS: u64 = 100;

/// Replays a WAV file as a live frame stream.
///
/// Frames are paced in real time so the capture loop sees the same
/// cadence a live source would produce; the stream ends (channel close)
/// when the file is exhausted, which terminates the capture loop.
pub struct FileSource {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let reader = hound::WavReader::open(path)
            .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;

        let spec = reader.spec();
        let samples: Vec<i16> = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read audio samples")?;

        info!(
            "Opened audio file: {} ({}Hz, {} channels, {} samples)",
            path.display(),
            spec.sample_rate,
            spec.channels,
            samples.len()
        );

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Start streaming frames. The sender task closes the channel after
    /// the last frame.
    pub fn stream(self) -> mpsc::Receiver<AudioFrame> {
        let (tx, rx) = mpsc::channel(32);

        let samples_per_frame =
            (self.sample_rate as u64 * FRAME_DURATION_MS / 1000) as usize * self.channels as usize;
        let sample_rate = self.sample_rate;
        let channels = self.channels;
        let samples = self.samples;

        tokio::spawn(async move {
            for (i, window) in samples.chunks(samples_per_frame.max(1)).enumerate() {
                let frame = AudioFrame {
                    samples: window.to_vec(),
                    sample_rate,
                    channels,
                    timestamp_ms: i as u64 * FRAME_DURATION_MS,
                };

                if tx.send(frame).await.is_err() {
                    break; // receiver dropped, stop replaying
                }

                tokio::time::sleep(Duration::from_millis(FRAME_DURATION_MS)).await;
            }

            info!("Audio file replay finished");
        });

        rx
    }
}
