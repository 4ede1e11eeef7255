use std::sync::Arc;

use crate::services::VideoStore;

/// Shared application state
///
/// The store is read-only after startup, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<VideoStore>,
}

impl AppState {
    pub fn new(store: VideoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
