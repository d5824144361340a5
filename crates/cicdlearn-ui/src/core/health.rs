//! Health probe state and its render projection.
//!
//! # Design
//! - One enum holds the probe state, so an error and a result can never be
//!   set together.
//! - `status_line` is the only place that decides what the status paragraph says.

use crate::models::{HealthResult, RequestFailure};

/// Top-level heading text.
pub const PAGE_TITLE: &str = "cicdlearn";
/// One-line project description under the heading.
pub const PAGE_DESCRIPTION: &str = "CI/CD learning project — axum + Yew + PostgreSQL";
/// Heading of the health section.
pub const HEALTH_HEADING: &str = "Backend health";
/// Test identifier carried by the status paragraph on success.
pub const HEALTH_STATUS_TEST_ID: &str = "health-status";
/// Text shown while the probe is in flight.
pub const LOADING_TEXT: &str = "Loading…";
/// Inline style of the error paragraph.
pub const ERROR_STYLE: &str = "color: #f88";

/// State of the single health probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HealthState {
    /// Request issued, no outcome yet.
    #[default]
    Loading,
    /// The request failed.
    Failed(RequestFailure),
    /// The request returned a health body.
    Ready(HealthResult),
}

impl HealthState {
    /// Apply the request outcome. Only `Loading` transitions; a settled state is
    /// returned unchanged.
    #[must_use]
    pub fn settle(self, outcome: Result<HealthResult, RequestFailure>) -> Self {
        match self {
            Self::Loading => match outcome {
                Ok(health) => Self::Ready(health),
                Err(failure) => Self::Failed(failure),
            },
            settled => settled,
        }
    }
}

/// Which branch of the status paragraph is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    /// Waiting for the response.
    Loading,
    /// Request failed.
    Error,
    /// Health body received.
    Success,
}

/// Text and presentation hints for the status paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    /// Branch being rendered.
    pub kind: StatusKind,
    /// Paragraph text.
    pub text: String,
}

impl StatusLine {
    /// Test identifier, present only on success.
    #[must_use]
    pub const fn test_id(&self) -> Option<&'static str> {
        match self.kind {
            StatusKind::Success => Some(HEALTH_STATUS_TEST_ID),
            StatusKind::Loading | StatusKind::Error => None,
        }
    }

    /// ARIA role; errors are announced as alerts.
    #[must_use]
    pub const fn role(&self) -> Option<&'static str> {
        match self.kind {
            StatusKind::Error => Some("alert"),
            StatusKind::Loading | StatusKind::Success => None,
        }
    }

    /// Inline style, used to colour errors.
    #[must_use]
    pub const fn inline_style(&self) -> Option<&'static str> {
        match self.kind {
            StatusKind::Error => Some(ERROR_STYLE),
            StatusKind::Loading | StatusKind::Success => None,
        }
    }

    /// `aria-busy` value while the request is in flight.
    #[must_use]
    pub const fn busy(&self) -> Option<&'static str> {
        match self.kind {
            StatusKind::Loading => Some("true"),
            StatusKind::Error | StatusKind::Success => None,
        }
    }

    /// CSS tone class for the paragraph.
    #[must_use]
    pub const fn tone(&self) -> &'static str {
        match self.kind {
            StatusKind::Loading => "muted",
            StatusKind::Error => "error",
            StatusKind::Success => "ok",
        }
    }
}

/// Project the probe state onto the status paragraph.
///
/// Render order is error, then success, then loading.
#[must_use]
pub fn status_line(state: &HealthState) -> StatusLine {
    match state {
        HealthState::Failed(failure) => StatusLine {
            kind: StatusKind::Error,
            text: format!("Error: {}", failure.message()),
        },
        HealthState::Ready(health) => StatusLine {
            kind: StatusKind::Success,
            text: format!("Status: {}", health.status_label()),
        },
        HealthState::Loading => StatusLine {
            kind: StatusKind::Loading,
            text: LOADING_TEXT.to_string(),
        },
    }
}
