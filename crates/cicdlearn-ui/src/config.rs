//! Backend location for the health probe.
//!
//! The browser has no process environment, so the base URL is baked in at
//! build time and never changes afterwards.

/// Path of the health endpoint, appended to the base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Immutable client configuration, created once when the app starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Configuration with an explicit base URL. An empty base makes requests
    /// relative to the page origin.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Configuration from the value of `CICDLEARN_API_URL` at build time,
    /// falling back to an empty base.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CICDLEARN_API_URL").unwrap_or_default())
    }

    /// Full URL of the health endpoint.
    #[must_use]
    pub fn health_url(&self) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        format!("{base}{HEALTH_PATH}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_yields_relative_path() {
        assert_eq!(ApiConfig::default().health_url(), "/api/health");
        assert_eq!(ApiConfig::new("").health_url(), "/api/health");
    }

    #[test]
    fn base_is_joined_with_health_path() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.health_url(), "http://localhost:8000/api/health");
    }

    #[test]
    fn single_trailing_slash_is_trimmed() {
        assert_eq!(
            ApiConfig::new("https://api.example/").health_url(),
            "https://api.example/api/health"
        );
    }

    #[test]
    fn build_env_matches_compile_time_value() {
        let expected = option_env!("CICDLEARN_API_URL").unwrap_or_default();
        assert_eq!(ApiConfig::from_build_env(), ApiConfig::new(expected));
    }
}
