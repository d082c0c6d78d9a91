use std::path::{Path, PathBuf};

/// Format of a session directory name (assigned once at creation)
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Full session audio, rewritten after every captured frame batch
pub const AUDIO_FILE: &str = "audio.wav";
/// Rolling-chunk export, overwritten before each transcription call
pub const CHUNK_FILE: &str = "audio_temp.wav";
/// Incremental transcript (append-only during capture)
pub const TRANSCRIPT_FILE: &str = "transcricao.txt";
/// Cached summary, computed at most once
pub const SUMMARY_FILE: &str = "resumo.txt";
/// Session title
pub const TITLE_FILE: &str = "titulo.txt";

/// Resolved file locations for one session directory
#[derive(Debug, Clone)]
pub struct SessionPaths {
    id: String,
    dir: PathBuf,
}

impl SessionPaths {
    pub(crate) fn new(id: String, dir: PathBuf) -> Self {
        Self { id, dir }
    }

    /// Session identifier (the timestamp string)
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn audio(&self) -> PathBuf {
        self.dir.join(AUDIO_FILE)
    }

    pub fn chunk(&self) -> PathBuf {
        self.dir.join(CHUNK_FILE)
    }

    pub fn transcript(&self) -> PathBuf {
        self.dir.join(TRANSCRIPT_FILE)
    }

    pub fn summary(&self) -> PathBuf {
        self.dir.join(SUMMARY_FILE)
    }

    pub fn title(&self) -> PathBuf {
        self.dir.join(TITLE_FILE)
    }
}

/// Render a session id as a display label: `DD/MM/YYYY HH:MM:SS`.
///
/// Returns `None` when the directory name does not follow
/// [`TIMESTAMP_FORMAT`].
pub fn session_label(session_id: &str) -> Option<String> {
    let parts: Vec<&str> = session_id.split('_').collect();
    let well_formed = parts.len() == 6
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return None;
    }

    let (year, month, day, hour, minute, second) =
        (parts[0], parts[1], parts[2], parts[3], parts[4], parts[5]);

    Some(format!(
        "{day}/{month}/{year} {hour}:{minute}:{second}"
    ))
}
