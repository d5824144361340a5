//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, extract::MatchedPath, http::Request, routing::get};
use cicdlearn_telemetry::build_sha;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::error::{ApiServerError, ApiServerResult};
use crate::http::constants::{API_PREFIX, HEADER_REQUEST_ID};
use crate::http::events::{create_event, list_events};
use crate::http::health::health;
use crate::http::items::{create_item, list_items};
use crate::http::shutdown::shutdown_signal;
use crate::state::ApiState;

/// Axum router wrapper that hosts the cicdlearn API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct the server with repositories wired through shared state.
    #[must_use]
    pub fn new(state: ApiState) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %route_label(request),
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(cicdlearn_telemetry::set_request_id_layer())
            .layer(cicdlearn_telemetry::propagate_request_id_layer())
            .layer(trace_layer);

        let router = Router::new()
            .merge(Self::routes())
            .nest(API_PREFIX, Self::routes())
            .layer(layered)
            .layer(cors_layer)
            .with_state(state);

        Self { router }
    }

    fn routes() -> Router<ApiState> {
        Router::new()
            .route("/health", get(health))
            .route("/items", get(list_items).post(create_item))
            .route("/events", get(list_events).post(create_event))
    }

    /// Consume the server and hand back the configured router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve the API on the supplied address until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> ApiServerResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        info!(addr = %addr, "api listening");
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }
}

/// Route template the request matched, or the raw path when nothing matched.
fn route_label<B>(request: &Request<B>) -> String {
    request.extensions().get::<MatchedPath>().map_or_else(
        || request.uri().path().to_string(),
        |matched| matched.as_str().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::Result;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, StatusCode};
    use cicdlearn_data::{DataError, DataResult, Event, EventRepository, Item, ItemRepository};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        items: Mutex<Vec<Item>>,
        events: Mutex<Vec<Event>>,
    }

    #[async_trait]
    impl ItemRepository for MemoryStore {
        async fn list_items(&self) -> DataResult<Vec<Item>> {
            let items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            Ok(items.clone())
        }

        async fn create_item(&self, name: &str) -> DataResult<Item> {
            let mut items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let item = Item {
                id: i32::try_from(items.len()).unwrap_or(i32::MAX) + 1,
                name: name.to_string(),
            };
            items.push(item.clone());
            Ok(item)
        }
    }

    #[async_trait]
    impl EventRepository for MemoryStore {
        async fn recent_events(&self, limit: i64) -> DataResult<Vec<Event>> {
            let events = self.events.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let limit = usize::try_from(limit).unwrap_or(0);
            Ok(events.iter().rev().take(limit).cloned().collect())
        }

        async fn create_event(&self, message: &str) -> DataResult<Event> {
            let mut events = self.events.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let event = Event {
                id: format!("evt-{}", events.len() + 1),
                message: message.to_string(),
            };
            events.push(event.clone());
            Ok(event)
        }
    }

    struct OfflineStore;

    fn offline() -> DataError {
        DataError::QueryFailed {
            operation: "offline",
            source: sqlx::Error::PoolTimedOut,
        }
    }

    #[async_trait]
    impl ItemRepository for OfflineStore {
        async fn list_items(&self) -> DataResult<Vec<Item>> {
            Err(offline())
        }

        async fn create_item(&self, _name: &str) -> DataResult<Item> {
            Err(offline())
        }
    }

    #[async_trait]
    impl EventRepository for OfflineStore {
        async fn recent_events(&self, _limit: i64) -> DataResult<Vec<Event>> {
            Err(offline())
        }

        async fn create_event(&self, _message: &str) -> DataResult<Event> {
            Err(offline())
        }
    }

    fn memory_router() -> Router {
        ApiServer::new(ApiState::from_store(MemoryStore::default())).into_router()
    }

    async fn send(router: &Router, method: Method, uri: &str) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())?;
        let response = router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, body))
    }

    #[tokio::test]
    async fn health_reports_ok() -> Result<()> {
        let router = memory_router();
        let (status, body) = send(&router, Method::GET, "/health").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
        Ok(())
    }

    #[tokio::test]
    async fn health_is_also_served_under_api_prefix() -> Result<()> {
        let router = memory_router();
        let (status, body) = send(&router, Method::GET, "/api/health").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        Ok(())
    }

    #[tokio::test]
    async fn items_start_empty_then_grow() -> Result<()> {
        let router = memory_router();
        let (status, body) = send(&router, Method::GET, "/items").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = send(&router, Method::POST, "/items?name=test-item").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "test-item");
        assert!(body.get("id").is_some());

        let (_, body) = send(&router, Method::GET, "/items").await?;
        assert_eq!(body, json!([{"id": 1, "name": "test-item"}]));
        Ok(())
    }

    #[tokio::test]
    async fn creating_item_without_name_is_bad_request() -> Result<()> {
        let router = memory_router();
        let (status, body) = send(&router, Method::POST, "/items").await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "bad request");
        Ok(())
    }

    #[tokio::test]
    async fn events_are_listed_newest_first() -> Result<()> {
        let router = memory_router();
        let (status, body) = send(&router, Method::POST, "/events?message=hello").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "hello");
        assert!(body["id"].is_string());

        send(&router, Method::POST, "/events?message=world").await?;
        let (status, body) = send(&router, Method::GET, "/events").await?;
        assert_eq!(status, StatusCode::OK);
        let messages: Vec<&str> = body
            .as_array()
            .map(|events| events.iter().filter_map(|e| e["message"].as_str()).collect())
            .unwrap_or_default();
        assert_eq!(messages, vec!["world", "hello"]);
        Ok(())
    }

    #[tokio::test]
    async fn storage_failures_surface_as_service_unavailable() -> Result<()> {
        let router = ApiServer::new(ApiState::from_store(OfflineStore)).into_router();
        for (method, uri) in [
            (Method::GET, "/items"),
            (Method::POST, "/items?name=x"),
            (Method::GET, "/events"),
            (Method::POST, "/events?message=x"),
        ] {
            let (status, body) = send(&router, method, uri).await?;
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{uri}");
            assert_eq!(body["title"], "service unavailable");
        }
        let (status, _) = send(&router, Method::GET, "/health").await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn responses_carry_request_id() -> Result<()> {
        let router = memory_router();
        let request = Request::builder()
            .uri("/health")
            .header(HEADER_REQUEST_ID, "req-123")
            .body(Body::empty())?;
        let response = router.oneshot(request).await?;
        assert_eq!(
            response
                .headers()
                .get(HEADER_REQUEST_ID)
                .and_then(|value| value.to_str().ok()),
            Some("req-123")
        );
        Ok(())
    }

    #[tokio::test]
    async fn server_generates_request_id_when_absent() -> Result<()> {
        let router = memory_router();
        let request = Request::builder().uri("/health").body(Body::empty())?;
        let response = router.oneshot(request).await?;
        let generated = response
            .headers()
            .get(HEADER_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(!generated.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn events_listing_is_capped_at_most_recent() -> Result<()> {
        let store = MemoryStore::default();
        for n in 1..=101 {
            store.create_event(&format!("event-{n}")).await?;
        }
        let router = ApiServer::new(ApiState::from_store(store)).into_router();

        let (status, body) = send(&router, Method::GET, "/events").await?;
        assert_eq!(status, StatusCode::OK);
        let events = body.as_array().cloned().unwrap_or_default();
        assert_eq!(events.len(), 100);
        assert_eq!(events[0]["message"], "event-101");
        assert_eq!(events[99]["message"], "event-2");
        Ok(())
    }

    #[tokio::test]
    async fn route_label_prefers_matched_template() -> Result<()> {
        let router: Router = Router::new()
            .route(
                "/items/{id}",
                get(|request: Request<Body>| async move { route_label(&request) }),
            )
            .nest(
                "/api",
                Router::new().route(
                    "/health",
                    get(|request: Request<Body>| async move { route_label(&request) }),
                ),
            )
            .fallback(|request: Request<Body>| async move { route_label(&request) });

        for (uri, expected) in [
            ("/items/7", "/items/{id}"),
            ("/api/health", "/api/health"),
            ("/missing", "/missing"),
        ] {
            let request = Request::builder().uri(uri).body(Body::empty())?;
            let response = router.clone().oneshot(request).await?;
            let bytes = to_bytes(response.into_body(), usize::MAX).await?;
            assert_eq!(std::str::from_utf8(&bytes)?, expected, "{uri}");
        }
        Ok(())
    }
}
