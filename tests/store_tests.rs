// Integration tests for the session file store
//
// These tests verify the per-subject/per-session directory layout,
// missing-file semantics, and session listing order.

use anyhow::Result;
use meeting_scribe::store::{session_label, FileStore};
use std::fs;
use tempfile::TempDir;

fn make_session(store: &FileStore, subject: &str, session_id: &str) -> Result<()> {
    fs::create_dir_all(store.root().join(subject).join(session_id))?;
    Ok(())
}

#[test]
fn test_read_missing_file_returns_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    let missing = temp_dir.path().join("does-not-exist.txt");
    assert_eq!(store.read_or_empty(&missing)?, "");

    Ok(())
}

#[test]
fn test_read_or_empty_propagates_unreadable_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    // A directory where a text file is expected is an I/O error, not a
    // missing file, and must not read as empty
    let path = temp_dir.path().join("resumo.txt");
    fs::create_dir(&path)?;

    assert!(store.read_or_empty(&path).is_err());

    Ok(())
}

#[test]
fn test_write_then_read_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    let path = temp_dir.path().join("note.txt");
    store.write_text(&path, "hello")?;
    assert_eq!(store.read_or_empty(&path)?, "hello");

    // Whole-file overwrite, not append
    store.write_text(&path, "replaced")?;
    assert_eq!(store.read_or_empty(&path)?, "replaced");

    Ok(())
}

#[test]
fn test_create_session_assigns_timestamp_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    let paths = store.create_session("alice")?;

    assert!(paths.dir().is_dir(), "Session directory should exist");
    assert!(
        session_label(paths.id()).is_some(),
        "Session id should follow the timestamp format, got {}",
        paths.id()
    );
    assert!(store.session_exists("alice", paths.id()));

    Ok(())
}

#[test]
fn test_list_subjects_sorted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    make_session(&store, "carol", "2024_01_01_10_00_00")?;
    make_session(&store, "alice", "2024_01_01_10_00_00")?;
    make_session(&store, "bob", "2024_01_01_10_00_00")?;

    assert_eq!(store.list_subjects()?, vec!["alice", "bob", "carol"]);

    Ok(())
}

#[test]
fn test_list_sessions_newest_first() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    make_session(&store, "alice", "2024_01_02_09_00_00")?;
    make_session(&store, "alice", "2024_12_24_18_30_00")?;
    make_session(&store, "alice", "2024_01_02_09_00_01")?;

    let sessions = store.list_sessions("alice")?;
    let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "2024_12_24_18_30_00",
            "2024_01_02_09_00_01",
            "2024_01_02_09_00_00"
        ]
    );

    Ok(())
}

#[test]
fn test_list_sessions_skips_foreign_directories() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    make_session(&store, "alice", "2024_01_02_09_00_00")?;
    fs::create_dir_all(store.root().join("alice").join("notes"))?;
    fs::write(store.root().join("alice").join("stray.txt"), "x")?;

    let sessions = store.list_sessions("alice")?;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, "2024_01_02_09_00_00");

    Ok(())
}

#[test]
fn test_list_sessions_unknown_subject_is_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    assert!(store.list_sessions("nobody")?.is_empty());

    Ok(())
}

#[test]
fn test_session_label_format() {
    assert_eq!(
        session_label("2024_05_01_10_30_00").as_deref(),
        Some("01/05/2024 10:30:00")
    );

    assert_eq!(session_label("notes"), None);
    assert_eq!(session_label("2024_05_01"), None);
    assert_eq!(session_label("2024_05_01_10_30_xx"), None);
}

#[test]
fn test_session_entry_label_includes_title() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    make_session(&store, "alice", "2024_05_01_10_30_00")?;
    let paths = store.session("alice", "2024_05_01_10_30_00");
    store.write_text(&paths.title(), "Primeira consulta")?;

    let sessions = store.list_sessions("alice")?;
    assert_eq!(sessions[0].label, "01/05/2024 10:30:00 - Primeira consulta");

    Ok(())
}

#[test]
fn test_session_entry_label_without_title() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path())?;

    make_session(&store, "alice", "2024_05_01_10_30_00")?;

    let sessions = store.list_sessions("alice")?;
    assert_eq!(sessions[0].label, "01/05/2024 10:30:00");

    Ok(())
}
