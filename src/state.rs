use crate::registry::GroupRegistry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Mutex<GroupRegistry>>,
}

impl AppState {
    pub fn new(registry: GroupRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
