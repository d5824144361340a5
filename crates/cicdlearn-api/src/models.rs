//! Wire DTOs for the HTTP surface.

use serde::{Deserialize, Serialize};

/// RFC9457-style problem document returned for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// Problem type URI.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short, constant summary.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Request-specific explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
}

/// Query string accepted by `POST /items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItemQuery {
    /// Name of the new item.
    pub name: Option<String>,
}

/// Query string accepted by `POST /events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEventQuery {
    /// Message to record.
    pub message: Option<String>,
}
