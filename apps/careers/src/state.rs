use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::CareerStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CareerStore>,
    /// Held across a load/insert/save cycle so writes from this process never interleave.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn CareerStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
