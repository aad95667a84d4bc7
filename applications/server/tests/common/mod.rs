//! Shared helpers for server integration tests
//!
//! Each test gets its own temp-file SQLite database with migrations applied,
//! wired through the same constructor path the binary uses.

use axum::Router;
use songbook_server::{api, services::CatalogService, state::AppState};
use songbook_store::{SongInput, SongStore};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestCatalog {
    pub catalog: Arc<CatalogService>,
    pub store: SongStore,
    _temp_dir: TempDir,
}

pub async fn create_test_catalog() -> TestCatalog {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = songbook_store::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    songbook_store::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let store = SongStore::new(pool);
    let catalog = Arc::new(CatalogService::new(store.clone()));

    TestCatalog {
        catalog,
        store,
        _temp_dir: temp_dir,
    }
}

/// Build the full router over a fresh test database
pub async fn create_test_app() -> (Router, TestCatalog) {
    let test_catalog = create_test_catalog().await;
    let app = api::router(AppState::new(Arc::clone(&test_catalog.catalog)));
    (app, test_catalog)
}

pub fn song_input(
    title: &str,
    artist: &str,
    album: Option<&str>,
    duration: i64,
    release_year: i64,
) -> SongInput {
    SongInput::new(
        title,
        artist,
        album.map(str::to_string),
        duration,
        release_year,
    )
}

/// The two-song fixture used across catalog tests
pub async fn seed_catalog(store: &SongStore) {
    store
        .insert(&song_input(
            "Dog Eat Dog II",
            "Odumodublvck",
            Some("Eziokwu"),
            240,
            2023,
        ))
        .await
        .expect("Failed to seed song");
    store
        .insert(&song_input(
            "Declan Rice",
            "Odumodublvck",
            Some("Eziokwu"),
            200,
            2023,
        ))
        .await
        .expect("Failed to seed song");
}
