//! Audio frames, PCM buffering and WAV I/O
//!
//! Capture sources deliver [`AudioFrame`]s over a `tokio::sync::mpsc`
//! channel; the capture loop accumulates them in [`AudioBuffer`]s and
//! exports 16-bit PCM WAV. [`FileSource`] replays an existing WAV file
//! as a paced frame stream for file-based recording.

mod buffer;
mod frame;
mod source;

pub use buffer::AudioBuffer;
pub use frame::AudioFrame;
pub use source::FileSource;
