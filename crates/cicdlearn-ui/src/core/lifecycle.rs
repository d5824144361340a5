//! Fire-once health probe tied to the page's lifetime.
//!
//! # Design
//! - The page creates one `MountGuard` per mount and releases it on teardown.
//! - `probe_health` awaits exactly one request and drops the outcome if the
//!   guard was released while it was in flight.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;

use crate::core::health::HealthState;
use crate::models::{HealthResult, RequestFailure};

/// Anything that can answer the health request.
#[async_trait(?Send)]
pub trait HealthSource {
    /// Issue one health request.
    async fn fetch_health(&self) -> Result<HealthResult, RequestFailure>;
}

/// Shared, comparable handle to a [`HealthSource`], suitable for component
/// properties.
#[derive(Clone)]
pub struct HealthSourceHandle(Rc<dyn HealthSource>);

impl HealthSourceHandle {
    /// Wrap a source.
    pub fn new(source: impl HealthSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// Borrow the wrapped source.
    #[must_use]
    pub fn source(&self) -> &dyn HealthSource {
        self.0.as_ref()
    }
}

impl PartialEq for HealthSourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HealthSourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HealthSourceHandle")
    }
}

/// Liveness flag shared between a mounted page and its in-flight probe.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl MountGuard {
    /// A guard for a freshly mounted page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Mark the page as torn down. Every clone observes the change.
    pub fn release(&self) {
        self.mounted.set(false);
    }

    /// `true` until [`release`](Self::release) is called.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the single health request and settle the page state.
///
/// Returns `None` when the page was torn down before the response arrived.
pub async fn probe_health(source: &dyn HealthSource, guard: &MountGuard) -> Option<HealthState> {
    let outcome = source.fetch_health().await;
    guard
        .is_mounted()
        .then(|| HealthState::Loading.settle(outcome))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::health::{HEALTH_STATUS_TEST_ID, PAGE_TITLE, StatusLine, status_line};
    use crate::models::decode_health_body;

    /// Serves a canned body, the way a mocked endpoint would.
    struct CannedEndpoint {
        body: &'static str,
        calls: Cell<u32>,
    }

    impl CannedEndpoint {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl HealthSource for CannedEndpoint {
        async fn fetch_health(&self) -> Result<HealthResult, RequestFailure> {
            self.calls.set(self.calls.get() + 1);
            decode_health_body(self.body)
        }
    }

    struct Unreachable;

    #[async_trait(?Send)]
    impl HealthSource for Unreachable {
        async fn fetch_health(&self) -> Result<HealthResult, RequestFailure> {
            Err(RequestFailure::network("Failed to fetch"))
        }
    }

    /// Tears the page down while the request is still in flight.
    struct UnmountsMidFlight {
        guard: RefCell<Option<MountGuard>>,
    }

    #[async_trait(?Send)]
    impl HealthSource for UnmountsMidFlight {
        async fn fetch_health(&self) -> Result<HealthResult, RequestFailure> {
            if let Some(guard) = self.guard.borrow_mut().take() {
                guard.release();
            }
            Ok(HealthResult {
                status: Some("ok".into()),
            })
        }
    }

    #[tokio::test]
    async fn mocked_ok_endpoint_renders_status() {
        let endpoint = CannedEndpoint::new(r#"{"status":"ok"}"#);
        let guard = MountGuard::new();

        let state = probe_health(&endpoint, &guard).await;
        let line = state.as_ref().map(status_line);

        assert_eq!(PAGE_TITLE, "cicdlearn");
        assert_eq!(line.as_ref().map(|l| l.text.as_str()), Some("Status: ok"));
        assert_eq!(
            line.as_ref().and_then(StatusLine::test_id),
            Some(HEALTH_STATUS_TEST_ID)
        );
        assert_eq!(endpoint.calls.get(), 1);
    }

    #[tokio::test]
    async fn body_without_status_renders_unknown() {
        let endpoint = CannedEndpoint::new(r#"{"database":"ok"}"#);
        let state = probe_health(&endpoint, &MountGuard::new()).await;
        assert_eq!(
            state.map(|s| status_line(&s).text),
            Some("Status: unknown".to_string())
        );
    }

    #[tokio::test]
    async fn malformed_body_renders_error() {
        let endpoint = CannedEndpoint::new("<!doctype html>");
        let state = probe_health(&endpoint, &MountGuard::new()).await;
        let text = state.map(|s| status_line(&s).text).unwrap_or_default();
        assert!(text.starts_with("Error: "), "{text}");
        assert!(!text.contains("Status"));
    }

    #[tokio::test]
    async fn network_failure_renders_message() {
        let state = probe_health(&Unreachable, &MountGuard::new()).await;
        assert_eq!(
            state,
            Some(HealthState::Failed(RequestFailure::network("Failed to fetch")))
        );
    }

    #[tokio::test]
    async fn late_response_after_unmount_is_dropped() {
        let guard = MountGuard::new();
        let source = UnmountsMidFlight {
            guard: RefCell::new(Some(guard.clone())),
        };

        let state = probe_health(&source, &guard).await;

        assert!(!guard.is_mounted());
        assert_eq!(state, None);
    }

    #[test]
    fn guard_release_is_shared_between_clones() {
        let guard = MountGuard::default();
        let task_view = guard.clone();
        assert!(task_view.is_mounted());
        guard.release();
        assert!(!task_view.is_mounted());
    }

    #[test]
    fn handles_compare_by_identity() {
        let first = HealthSourceHandle::new(Unreachable);
        let second = HealthSourceHandle::new(Unreachable);
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
