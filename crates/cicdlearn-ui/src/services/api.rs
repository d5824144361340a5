//! HTTP client for the backend health endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::ApiConfig;
use crate::core::lifecycle::HealthSource;
use crate::models::{HealthResult, RequestFailure, decode_health_body};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl HealthSource for ApiClient {
    // The status code is not inspected; any body that decodes counts.
    async fn fetch_health(&self) -> Result<HealthResult, RequestFailure> {
        let response = Request::get(&self.config.health_url())
            .send()
            .await
            .map_err(RequestFailure::network)?;
        let body = response.text().await.map_err(RequestFailure::network)?;
        decode_health_body(&body)
    }
}
