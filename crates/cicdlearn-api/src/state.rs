//! Shared handler state.

use std::sync::Arc;

use cicdlearn_data::{EventRepository, ItemRepository};

/// Repositories shared by every request handler.
#[derive(Clone)]
pub struct ApiState {
    pub(crate) items: Arc<dyn ItemRepository>,
    pub(crate) events: Arc<dyn EventRepository>,
}

impl ApiState {
    /// Build state from the item and event repositories.
    #[must_use]
    pub fn new(items: Arc<dyn ItemRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { items, events }
    }

    /// Build state from one store that backs both repositories.
    #[must_use]
    pub fn from_store<S>(store: S) -> Self
    where
        S: ItemRepository + EventRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            items: store.clone(),
            events: store,
        }
    }
}
