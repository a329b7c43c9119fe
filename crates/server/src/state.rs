use std::sync::Arc;

/// Shared by every handler. Requests open their own connection from the URL.
#[derive(Debug, Clone)]
pub struct AppState {
    pub database_url: Arc<str>,
}

impl AppState {
    pub fn new(database_url: impl Into<Arc<str>>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}
