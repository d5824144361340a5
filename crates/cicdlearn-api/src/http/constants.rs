//! Shared HTTP constants (headers, problem URIs, route prefixes).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// Prefix under which every route is also mounted for same-origin deployments.
pub const API_PREFIX: &str = "/api";

pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://cicdlearn.dev/problems/bad-request";
pub(crate) const PROBLEM_SERVICE_UNAVAILABLE: &str =
    "https://cicdlearn.dev/problems/service-unavailable";
