use crate::browse::SessionBrowser;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Browser over the session file store
    pub browser: Arc<SessionBrowser>,
}

impl AppState {
    pub fn new(browser: SessionBrowser) -> Self {
        Self {
            browser: Arc::new(browser),
        }
    }
}
