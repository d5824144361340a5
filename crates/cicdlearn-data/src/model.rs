//! Row types exchanged between the store and the HTTP surface.

use serde::{Deserialize, Serialize};

/// Upper bound on the number of events returned by a listing.
pub const MAX_RECENT_EVENTS: i64 = 100;

/// A named item persisted in the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    /// Database-assigned identifier.
    pub id: i32,
    /// Item name.
    pub name: String,
}

/// A free-form event message. The identifier is exposed as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque identifier.
    pub id: String,
    /// Event message; empty when none was recorded.
    pub message: String,
}

#[derive(sqlx::FromRow)]
pub(crate) struct EventRow {
    pub(crate) id: i64,
    pub(crate) message: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id.to_string(),
            message: row.message,
        }
    }
}
