#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! cicdlearn backend bootstrap wiring.
//!
//! Layout: `settings.rs` (environment settings), `bootstrap.rs` (service
//! wiring), `error.rs` (application errors).

/// Application bootstrap.
pub mod bootstrap;
/// Application-level error type.
pub mod error;
/// Environment-driven settings.
pub mod settings;

pub use bootstrap::run_app;
pub use error::{AppError, AppResult};
pub use settings::Settings;
