use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::layout::{session_label, SessionPaths, TIMESTAMP_FORMAT};

/// A session directory listed under a subject
#[derive(Debug, Clone, Serialize)]
pub struct SessionEntry {
    /// Session identifier (timestamp directory name)
    pub id: String,
    /// Display label: `DD/MM/YYYY HH:MM:SS`, plus ` - <title>` when titled
    pub label: String,
}

/// Per-subject, per-session file tree rooted at a single directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create store root: {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a text file, treating a missing file as empty. Other I/O
    /// errors (permissions, not-a-file) propagate.
    pub fn read_or_empty(&self, path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }

    /// Overwrite a text file in full.
    pub fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Create a session directory for a subject, named after the current
    /// local time. Fails if a session with the same timestamp already
    /// exists; the timestamp never changes afterwards.
    pub fn create_session(&self, subject: &str) -> Result<SessionPaths> {
        let subject_dir = self.root.join(subject);
        fs::create_dir_all(&subject_dir)
            .with_context(|| format!("Failed to create subject directory: {subject}"))?;

        let id = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let dir = subject_dir.join(&id);
        fs::create_dir(&dir)
            .with_context(|| format!("Failed to create session directory: {}", dir.display()))?;

        info!("Created session {} for subject {}", id, subject);

        Ok(SessionPaths::new(id, dir))
    }

    /// Resolve paths for an existing (or prospective) session.
    pub fn session(&self, subject: &str, session_id: &str) -> SessionPaths {
        let dir = self.root.join(subject).join(session_id);
        SessionPaths::new(session_id.to_string(), dir)
    }

    pub fn session_exists(&self, subject: &str, session_id: &str) -> bool {
        self.root.join(subject).join(session_id).is_dir()
    }

    /// List subject directories, sorted by name.
    pub fn list_subjects(&self) -> Result<Vec<String>> {
        let mut subjects = Vec::new();

        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read store root: {}", self.root.display()))?;

        for entry in entries {
            let entry = entry.context("Failed to read store entry")?;
            if entry.file_type().context("Failed to stat store entry")?.is_dir() {
                subjects.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        subjects.sort();
        Ok(subjects)
    }

    /// List a subject's sessions, newest first.
    ///
    /// Directories that do not follow the timestamp naming are skipped.
    pub fn list_sessions(&self, subject: &str) -> Result<Vec<SessionEntry>> {
        let subject_dir = self.root.join(subject);
        if !subject_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();

        let entries = fs::read_dir(&subject_dir)
            .with_context(|| format!("Failed to read subject directory: {subject}"))?;

        for entry in entries {
            let entry = entry.context("Failed to read session entry")?;
            if !entry.file_type().context("Failed to stat session entry")?.is_dir() {
                continue;
            }
            let id = entry.file_name().to_string_lossy().into_owned();
            if session_label(&id).is_none() {
                warn!("Skipping non-session directory: {}/{}", subject, id);
                continue;
            }
            ids.push(id);
        }

        // Timestamp strings sort chronologically, so a reverse string
        // sort yields newest-first.
        ids.sort();
        ids.reverse();

        let mut sessions = Vec::with_capacity(ids.len());
        for id in ids {
            let mut label = session_label(&id).unwrap_or_else(|| id.clone());
            let title = self.read_or_empty(&self.session(subject, &id).title())?;
            if !title.is_empty() {
                label.push_str(&format!(" - {}", title.trim_end()));
            }
            sessions.push(SessionEntry { id, label });
        }

        Ok(sessions)
    }
}
