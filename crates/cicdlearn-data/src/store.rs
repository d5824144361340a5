//! `PostgreSQL`-backed implementation of the repositories.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

use crate::error::{DataError, Result};
use crate::model::{Event, EventRow, Item};
use crate::repository::{EventRepository, ItemRepository};

const LIST_ITEMS: &str = "SELECT id, name FROM items ORDER BY id";
const INSERT_ITEM: &str = "INSERT INTO items (name) VALUES ($1) RETURNING id, name";
const RECENT_EVENTS: &str =
    "SELECT id, message FROM events ORDER BY created_at DESC, id DESC LIMIT $1";
const INSERT_EVENT: &str = "INSERT INTO events (message) VALUES ($1) RETURNING id, message";

/// Connection pool sizing and timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Hard cap on open connections.
    pub max_connections: u32,
    /// Per-statement timeout, also used as the acquire timeout.
    pub command_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 5,
            command_timeout: Duration::from_secs(10),
        }
    }
}

/// Repository over a shared `PostgreSQL` pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database at `url` and apply pending migrations.
    ///
    /// Driver suffixes in the URL scheme (`postgresql+asyncpg://`) are accepted
    /// and stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the database is unreachable, or
    /// migrations fail.
    pub async fn connect(url: &str, settings: PoolSettings) -> Result<Self> {
        let timeout_ms = settings.command_timeout.as_millis().to_string();
        let options = PgConnectOptions::from_str(&normalize_dsn(url))
            .map_err(|source| DataError::Connect { source })?
            .options([("statement_timeout", timeout_ms.as_str())]);
        let pool = PgPoolOptions::new()
            .min_connections(settings.min_connections)
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.command_timeout)
            .connect_with(options)
            .await
            .map_err(|source| DataError::Connect { source })?;
        Self::new(pool).await
    }

    /// Wrap an existing pool, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if migrations fail.
    pub async fn new(pool: PgPool) -> Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|source| DataError::MigrationFailed { source })?;
        info!("database migrations applied");
        Ok(Self { pool })
    }

    /// Access the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ItemRepository for PgStore {
    async fn list_items(&self) -> Result<Vec<Item>> {
        sqlx::query_as::<_, Item>(LIST_ITEMS)
            .fetch_all(&self.pool)
            .await
            .map_err(DataError::query("items.list"))
    }

    async fn create_item(&self, name: &str) -> Result<Item> {
        sqlx::query_as::<_, Item>(INSERT_ITEM)
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(DataError::query("items.create"))
    }
}

#[async_trait]
impl EventRepository for PgStore {
    async fn recent_events(&self, limit: i64) -> Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(RECENT_EVENTS)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(DataError::query("events.recent"))?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn create_event(&self, message: &str) -> Result<Event> {
        sqlx::query_as::<_, EventRow>(INSERT_EVENT)
            .bind(message)
            .fetch_one(&self.pool)
            .await
            .map(Event::from)
            .map_err(DataError::query("events.create"))
    }
}

/// Strip a `+driver` suffix from the URL scheme so client-library style DSNs
/// (`postgresql+asyncpg://...`) are accepted by `sqlx`.
#[must_use]
pub fn normalize_dsn(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let base = scheme.split_once('+').map_or(scheme, |(base, _)| base);
            format!("{base}://{rest}")
        }
        None => url.to_string(),
    }
}
