//! Songbook Storage
//!
//! `SQLite` persistence layer for the song catalog.
//!
//! This crate owns the `Song` data model and the [`SongStore`], a thin record
//! store with one named method per query the catalog service relies on. All
//! matching is plain SQL; the service layer decides what emptiness means.
//!
//! # Example
//!
//! ```rust,no_run
//! use songbook_store::{create_pool, run_migrations, SongStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://songbook.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SongStore::new(pool);
//! let songs = store.find_all().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod model;
mod store;

pub use error::StorageError;
pub use model::{Song, SongInput};
pub use store::SongStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at startup to bring the schema up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://songbook.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
