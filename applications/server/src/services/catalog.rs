//! Song catalog service
//!
//! The one component with branching logic: validates payloads, normalizes
//! sort/pagination parameters, composes search predicates, and decides what
//! an empty result means. Everything else is delegated to the [`SongStore`].
//!
//! Emptiness policy: an unfiltered listing of an empty catalog is a success,
//! but a search that matches nothing is `NotFound`. The asymmetry is
//! intentional and covered by tests.

use chrono::{Datelike, Utc};
use songbook_store::{Song, SongInput, SongStore, StorageError};
use std::collections::BTreeMap;
use thiserror::Error;

/// Earliest accepted release year (the year of the first sound recording)
const MIN_RELEASE_YEAR: i64 = 1877;

/// Page size used when the caller asks for a non-positive one
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Sort field used when the caller provides none
const DEFAULT_SORT_FIELD: &str = "title";

/// Typed outcomes of catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or missing arguments (null payload, blank search term)
    #[error("{0}")]
    InvalidInput(String),

    /// Referenced song or search result set does not exist
    #[error("{0}")]
    NotFound(String),

    /// Field constraints violated on a payload about to be persisted;
    /// carries one message per offending field, keyed by field name
    #[error("Input validation failed")]
    Validation(BTreeMap<String, String>),

    /// Underlying store fault, surfaced opaquely
    #[error(transparent)]
    Store(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// One page of songs plus the total count and the normalized paging values
#[derive(Debug, Clone)]
pub struct SongPage {
    pub songs: Vec<Song>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

/// Validate a song payload before it reaches the store.
///
/// Pure function; returns an empty map when the payload is valid. Keys match
/// the JSON field names so the request layer can hand the map straight back
/// to the client.
pub fn validate(song: &SongInput) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if song.title.trim().is_empty() {
        errors.insert("title".to_string(), "Song title is required".to_string());
    }
    if song.artist.trim().is_empty() {
        errors.insert("artist".to_string(), "Artist name is required".to_string());
    }
    if song.duration <= 0 {
        errors.insert(
            "duration".to_string(),
            "Duration must be greater than zero".to_string(),
        );
    }

    let current_year = i64::from(Utc::now().year());
    if song.release_year < MIN_RELEASE_YEAR {
        errors.insert(
            "releaseYear".to_string(),
            format!("Release year cannot be before {MIN_RELEASE_YEAR}"),
        );
    } else if song.release_year > current_year {
        errors.insert(
            "releaseYear".to_string(),
            "Release year cannot be in the future".to_string(),
        );
    }

    errors
}

/// The song catalog service. Stateless; all state lives in the store.
#[derive(Clone)]
pub struct CatalogService {
    store: SongStore,
}

impl CatalogService {
    pub fn new(store: SongStore) -> Self {
        Self { store }
    }

    /// Get every song in store-default order. An empty catalog is an empty
    /// list, not an error.
    pub async fn get_all_songs(&self) -> Result<Vec<Song>> {
        Ok(self.store.find_all().await?)
    }

    /// Get one sorted page of songs.
    ///
    /// Out-of-range paging values are coerced rather than rejected: a
    /// non-positive size becomes 10 and a negative page becomes 0. A blank
    /// sort field falls back to `title`, and any direction other than a
    /// case-insensitive `desc` sorts ascending.
    pub async fn get_songs(
        &self,
        page: i64,
        size: i64,
        sort_by: Option<&str>,
        direction: Option<&str>,
    ) -> Result<SongPage> {
        let page = page.max(0);
        let size = if size <= 0 { DEFAULT_PAGE_SIZE } else { size };

        let sort_by = sort_by
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SORT_FIELD);
        let ascending = !direction
            .map(str::trim)
            .is_some_and(|d| d.eq_ignore_ascii_case("desc"));

        let (songs, total) = self.store.find_all_paged(page, size, sort_by, ascending).await?;

        Ok(SongPage {
            songs,
            total,
            page,
            size,
        })
    }

    /// Get a single song by id
    pub async fn get_song_by_id(&self, id: i64) -> Result<Song> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Song with ID {id} not found")))
    }

    /// Persist a new song and return the stored copy with its assigned id
    pub async fn save_song(&self, song: Option<SongInput>) -> Result<Song> {
        let song = song.ok_or_else(|| CatalogError::InvalidInput("Song cannot be null".to_string()))?;

        let errors = validate(&song);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        Ok(self.store.insert(&song).await?)
    }

    /// Replace all mutable fields of an existing song. The id never changes.
    pub async fn update_song(&self, id: i64, song: Option<SongInput>) -> Result<Song> {
        let song = song.ok_or_else(|| CatalogError::InvalidInput("Song cannot be null".to_string()))?;

        let errors = validate(&song);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        if self.store.find_by_id(id).await?.is_none() {
            return Err(CatalogError::NotFound(format!("Song with ID {id} not found")));
        }

        Ok(self.store.update(id, &song).await?)
    }

    /// Delete a song by id. The delete is never issued for a missing id.
    pub async fn delete_song(&self, id: i64) -> Result<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(CatalogError::NotFound(format!("Song with ID {id} not found")));
        }

        Ok(self.store.delete_by_id(id).await?)
    }

    /// Search songs by artist (case-insensitive substring)
    pub async fn search_songs_by_artist(&self, artist: Option<&str>) -> Result<Vec<Song>> {
        let artist = required_term(artist, "Artist")?;
        let songs = self.store.find_by_artist_containing(artist).await?;
        if songs.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "No songs found for artist: {artist}"
            )));
        }
        Ok(songs)
    }

    /// Search songs by album (case-insensitive substring)
    pub async fn search_songs_by_album(&self, album: Option<&str>) -> Result<Vec<Song>> {
        let album = required_term(album, "Album")?;
        let songs = self.store.find_by_album_containing(album).await?;
        if songs.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "No songs found for album: {album}"
            )));
        }
        Ok(songs)
    }

    /// Search songs by title (case-insensitive substring)
    pub async fn search_songs_by_title(&self, title: Option<&str>) -> Result<Vec<Song>> {
        let title = required_term(title, "Title")?;
        let songs = self.store.find_by_title_containing(title).await?;
        if songs.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "No songs found with title: {title}"
            )));
        }
        Ok(songs)
    }

    /// Combined search across title, artist and album. Blank fields act as
    /// wildcards; at least one must be provided.
    pub async fn search_songs(
        &self,
        title: Option<&str>,
        artist: Option<&str>,
        album: Option<&str>,
    ) -> Result<Vec<Song>> {
        let title = title.unwrap_or("");
        let artist = artist.unwrap_or("");
        let album = album.unwrap_or("");

        if title.trim().is_empty() && artist.trim().is_empty() && album.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "At least one search criteria must be provided".to_string(),
            ));
        }

        let songs = self
            .store
            .find_by_fields_containing(title, artist, album)
            .await?;
        if songs.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "No songs found matching title: {title}, artist: {artist}, album: {album}"
            )));
        }
        Ok(songs)
    }
}

fn required_term<'a>(term: Option<&'a str>, field: &str) -> Result<&'a str> {
    match term {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(CatalogError::InvalidInput(format!("{field} cannot be blank"))),
    }
}
