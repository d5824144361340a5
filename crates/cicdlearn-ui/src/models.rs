//! Health payload and request failure types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Label shown when the backend omits `status`.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Body of a health response. Only `status` is read; other fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResult {
    /// Reported status, when present.
    #[serde(default)]
    pub status: Option<String>,
}

impl HealthResult {
    /// Status text for display, `unknown` when absent.
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or(UNKNOWN_STATUS)
    }
}

/// Failure of the health request. The display text is the captured message
/// alone.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestFailure {
    /// The request could not be sent or its body could not be read.
    #[error("{message}")]
    Network {
        /// Message reported by the transport.
        message: String,
    },
    /// The body was not a JSON object.
    #[error("{message}")]
    Decode {
        /// Message reported by the decoder.
        message: String,
    },
}

impl RequestFailure {
    /// Capture a transport failure.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }

    /// Capture a decoding failure.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }

    /// Captured message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message } | Self::Decode { message } => message,
        }
    }
}

/// Decode a health response body.
///
/// # Errors
///
/// Returns [`RequestFailure::Decode`] when the body is not JSON, is JSON but not
/// an object, or carries a non-string `status`.
pub fn decode_health_body(body: &str) -> Result<HealthResult, RequestFailure> {
    let value: Value = serde_json::from_str(body).map_err(RequestFailure::decode)?;
    if !value.is_object() {
        return Err(RequestFailure::decode(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(RequestFailure::decode)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
