//! Session browser
//!
//! Read-only view over the file store: subjects, sessions (newest
//! first), and per-session title/summary/transcript. The summary is
//! derived data: computed on first view of a titled session, cached to
//! disk, and never recomputed unless the cache file is deleted.

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::api::Summarizer;
use crate::store::{FileStore, SessionEntry};

/// Read-only contents of one session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// Session identifier (timestamp directory name)
    pub id: String,
    /// Session title, empty when none has been set
    pub title: String,
    /// Cached or freshly computed summary; empty for untitled sessions
    pub summary: String,
    /// Full transcript accumulated during capture
    pub transcript: String,
}

pub struct SessionBrowser {
    store: FileStore,
    summarizer: Arc<dyn Summarizer>,
}

impl SessionBrowser {
    pub fn new(store: FileStore, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { store, summarizer }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn subjects(&self) -> Result<Vec<String>> {
        self.store.list_subjects()
    }

    /// Sessions for a subject, newest first.
    pub fn sessions(&self, subject: &str) -> Result<Vec<SessionEntry>> {
        self.store.list_sessions(subject)
    }

    pub fn session_exists(&self, subject: &str, session_id: &str) -> bool {
        self.store.session_exists(subject, session_id)
    }

    /// Persist a session title.
    pub fn set_title(&self, subject: &str, session_id: &str, title: &str) -> Result<()> {
        let paths = self.store.session(subject, session_id);
        self.store.write_text(&paths.title(), title)?;
        info!("Title set for session {}/{}", subject, session_id);
        Ok(())
    }

    /// Assemble the read-only view of a session.
    ///
    /// When the session has a title but no cached summary, one is
    /// computed now and written to disk; every later view reads the
    /// cache. Untitled sessions are returned without a summary.
    pub async fn session_view(&self, subject: &str, session_id: &str) -> Result<SessionView> {
        if !self.store.session_exists(subject, session_id) {
            anyhow::bail!("Session not found: {subject}/{session_id}");
        }

        let paths = self.store.session(subject, session_id);
        let title = self.store.read_or_empty(&paths.title())?;
        let transcript = self.store.read_or_empty(&paths.transcript())?;

        let mut summary = self.store.read_or_empty(&paths.summary())?;
        if summary.is_empty() && !title.is_empty() {
            info!("Generating summary for session {}/{}", subject, session_id);
            summary = self.summarizer.summarize(&transcript).await?;
            self.store.write_text(&paths.summary(), &summary)?;
        }

        Ok(SessionView {
            id: session_id.to_string(),
            title,
            summary,
            transcript,
        })
    }
}
