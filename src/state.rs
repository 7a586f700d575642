//! Process-wide state, built once before serving and shared by every request.

use crate::config::Registry;
use crate::store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, registry: Registry) -> Self {
        AppState {
            store,
            registry: Arc::new(registry),
        }
    }
}
