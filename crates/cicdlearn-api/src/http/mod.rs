//! HTTP surface modules (router, handlers, problem responses).

/// Shared constants and header names.
pub mod constants;
/// Problem response helpers and error types.
pub mod errors;
/// Event listing and creation.
pub mod events;
/// Liveness endpoint.
pub mod health;
/// Item listing and creation.
pub mod items;
/// Router construction and server host.
pub mod router;
/// Signal handling for graceful shutdown.
pub mod shutdown;
