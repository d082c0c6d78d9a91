//! Incremental capture-and-transcription loop
//!
//! A [`CaptureSession`] owns one session directory and drives the loop:
//! poll the audio source with a bounded wait, accumulate the cumulative
//! and rolling buffers, rewrite the full-audio file per batch, and every
//! chunk interval export the rolling chunk and transcribe it, appending
//! the result to the on-disk transcript.

mod session;

pub use session::{CaptureConfig, CaptureSession, CaptureStats};
