/// API route modules
pub mod health;
pub mod songs;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Build the application router.
///
/// Static segments (`/songs/paginated`, `/songs/search`) take precedence over
/// the `/songs/:id` capture, so the search routes never collide with id
/// lookups.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/songs", get(songs::list_songs))
        .route("/songs", post(songs::add_song))
        .route("/songs/paginated", get(songs::list_songs_paginated))
        .route("/songs/search", get(songs::search_songs))
        .route("/songs/search/title", get(songs::search_by_title))
        .route("/songs/search/artist", get(songs::search_by_artist))
        .route("/songs/search/album", get(songs::search_by_album))
        .route("/songs/:id", get(songs::get_song))
        .route("/songs/:id", put(songs::update_song))
        .route("/songs/:id", delete(songs::delete_song))
        .with_state(state)
}
