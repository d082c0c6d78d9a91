//! File store for recorded sessions
//!
//! Sessions live in a two-level directory tree:
//! `<root>/<subject>/<YYYY_MM_DD_HH_MM_SS>/` with the session audio,
//! transcript, summary and title as individual files. Text writes are
//! whole-file overwrites; reading a missing text file yields an empty
//! string.

mod layout;
mod store;

pub use layout::{session_label, SessionPaths, TIMESTAMP_FORMAT};
pub use store::{FileStore, SessionEntry};
