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

//! Data access layer for cicdlearn: migrations, repository traits, and the
//! `PostgreSQL` store.
//!
//! Layout: `model.rs` (row types), `repository.rs` (storage seams),
//! `store.rs` (`PgStore`), `error.rs` (data errors).

pub mod error;
pub mod model;
pub mod repository;
pub mod store;

pub use error::{DataError, Result as DataResult};
pub use model::{Event, Item, MAX_RECENT_EVENTS};
pub use repository::{EventRepository, ItemRepository};
pub use store::{PgStore, PoolSettings, normalize_dsn};
