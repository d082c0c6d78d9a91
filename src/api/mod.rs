//! Remote API collaborators
//!
//! The capture loop and session browser depend on two capability traits:
//! [`Transcriber`] (audio bytes → text) and [`Summarizer`] (text → text).
//! Production implementations target OpenAI-compatible endpoints; tests
//! substitute fakes.

mod summarizer;
mod transcriber;

pub use summarizer::{render_summary_prompt, OpenAiSummarizer, Summarizer, SUMMARY_PROMPT_TEMPLATE};
pub use transcriber::{OpenAiTranscriber, Transcriber};

/// Request timeout for remote API calls
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Normalize a base URL and append an API path.
///
/// Rejects empty or scheme-less URLs up front so misconfiguration fails
/// at client construction rather than mid-session.
pub(crate) fn build_api_url(base_url: &str, api_path: &str) -> anyhow::Result<String> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        anyhow::bail!("API base URL not configured");
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        anyhow::bail!(
            "Invalid API base URL: must start with http:// or https://, got {trimmed}"
        );
    }

    Ok(format!("{}{}", trimmed.trim_end_matches('/'), api_path))
}
