//! Storage seams consumed by the HTTP handlers.
//!
//! # Design
//! - Handlers depend on these traits only, so tests can swap in fakes.
//! - Implementations own their connection handling and report `DataError`.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Event, Item};

/// Item persistence operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be queried.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Insert a new item and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails.
    async fn create_item(&self, name: &str) -> Result<Item>;
}

/// Event persistence operations.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Return up to `limit` events, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be queried.
    async fn recent_events(&self, limit: i64) -> Result<Vec<Event>>;

    /// Record a new event and return it.
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails.
    async fn create_event(&self, message: &str) -> Result<Event>;
}
