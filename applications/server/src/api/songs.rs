/// Songs API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use songbook_store::{Song, SongInput};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

fn default_size() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PagedSongsResponse {
    pub songs: Vec<Song>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

/// GET /songs
pub async fn list_songs(State(state): State<AppState>) -> Result<Json<Vec<Song>>> {
    let songs = state.catalog.get_all_songs().await?;
    Ok(Json(songs))
}

/// GET /songs/paginated
pub async fn list_songs_paginated(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedSongsResponse>> {
    let page = state
        .catalog
        .get_songs(
            query.page,
            query.size,
            query.sort_by.as_deref(),
            query.direction.as_deref(),
        )
        .await?;

    Ok(Json(PagedSongsResponse {
        songs: page.songs,
        total: page.total,
        page: page.page,
        size: page.size,
    }))
}

/// GET /songs/:id
pub async fn get_song(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Song>> {
    let song = state.catalog.get_song_by_id(id).await?;
    Ok(Json(song))
}

/// POST /songs
///
/// The body is extracted as `Option<Json<..>>` so an absent or unreadable
/// payload reaches the service's null-payload contract instead of being
/// rejected with a framework-shaped error.
pub async fn add_song(
    State(state): State<AppState>,
    body: Option<Json<SongInput>>,
) -> Result<(StatusCode, Json<Song>)> {
    let song = state.catalog.save_song(body.map(|Json(input)| input)).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

/// PUT /songs/:id
pub async fn update_song(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    body: Option<Json<SongInput>>,
) -> Result<Json<Song>> {
    let song = state
        .catalog
        .update_song(id, body.map(|Json(input)| input))
        .await?;
    Ok(Json(song))
}

/// DELETE /songs/:id
pub async fn delete_song(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.catalog.delete_song(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /songs/search/title?title=
pub async fn search_by_title(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Song>>> {
    let songs = state
        .catalog
        .search_songs_by_title(query.title.as_deref())
        .await?;
    Ok(Json(songs))
}

/// GET /songs/search/artist?artist=
pub async fn search_by_artist(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Song>>> {
    let songs = state
        .catalog
        .search_songs_by_artist(query.artist.as_deref())
        .await?;
    Ok(Json(songs))
}

/// GET /songs/search/album?album=
pub async fn search_by_album(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Song>>> {
    let songs = state
        .catalog
        .search_songs_by_album(query.album.as_deref())
        .await?;
    Ok(Json(songs))
}

/// GET /songs/search?title=&artist=&album=
pub async fn search_songs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Song>>> {
    let songs = state
        .catalog
        .search_songs(
            query.title.as_deref(),
            query.artist.as_deref(),
            query.album.as_deref(),
        )
        .await?;
    Ok(Json(songs))
}
