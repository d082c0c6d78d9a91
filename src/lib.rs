pub mod api;
pub mod audio;
pub mod browse;
pub mod capture;
pub mod config;
pub mod http;
pub mod store;

pub use api::{OpenAiSummarizer, OpenAiTranscriber, Summarizer, Transcriber};
pub use audio::{AudioBuffer, AudioFrame, FileSource};
pub use browse::{SessionBrowser, SessionView};
pub use capture::{CaptureConfig, CaptureSession, CaptureStats};
pub use config::Config;
pub use http::{create_router, AppState};
pub use store::{FileStore, SessionEntry, SessionPaths};
