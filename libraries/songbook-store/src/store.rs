/// Record store implementation
use crate::model::{Song, SongInput};
use crate::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SONG_COLUMNS: &str = "id, title, artist, album, duration, release_year";

/// `SQLite`-backed record store for songs.
///
/// One named method per query; no policy decisions here. Case-insensitive
/// substring matching relies on `SQLite`'s default `LIKE` behavior.
#[derive(Clone)]
pub struct SongStore {
    pool: SqlitePool,
}

impl SongStore {
    /// Create a store over an existing connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new song and return the persisted copy with its assigned id
    pub async fn insert(&self, song: &SongInput) -> Result<Song> {
        let result = sqlx::query(
            "INSERT INTO songs (title, artist, album, duration, release_year)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(song.duration)
        .bind(song.release_year)
        .execute(&self.pool)
        .await?;

        Ok(Song {
            id: result.last_insert_rowid(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            duration: song.duration,
            release_year: song.release_year,
        })
    }

    /// Replace all mutable fields of the song with the given id
    pub async fn update(&self, id: i64, song: &SongInput) -> Result<Song> {
        sqlx::query(
            "UPDATE songs
             SET title = ?, artist = ?, album = ?, duration = ?, release_year = ?
             WHERE id = ?",
        )
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(song.duration)
        .bind(song.release_year)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Song {
            id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            duration: song.duration,
            release_year: song.release_year,
        })
    }

    /// Get a song by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Song>> {
        let row = sqlx::query(&format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| song_from_row(&row)))
    }

    /// Get all songs in store-default (insertion) order
    pub async fn find_all(&self) -> Result<Vec<Song>> {
        let rows = sqlx::query(&format!("SELECT {SONG_COLUMNS} FROM songs ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(song_from_row).collect())
    }

    /// Get one sorted page of songs plus the total count.
    ///
    /// `sort_field` is mapped through a fixed column whitelist; unknown fields
    /// fall back to sorting by title. ORDER BY cannot be bound as a parameter,
    /// so only whitelisted column names ever reach the SQL text.
    pub async fn find_all_paged(
        &self,
        page: i64,
        size: i64,
        sort_field: &str,
        ascending: bool,
    ) -> Result<(Vec<Song>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
            .fetch_one(&self.pool)
            .await?;

        let column = sort_column(sort_field);
        let direction = if ascending { "ASC" } else { "DESC" };
        let sql = format!(
            "SELECT {SONG_COLUMNS} FROM songs ORDER BY {column} {direction} LIMIT ? OFFSET ?"
        );

        let rows = sqlx::query(&sql)
            .bind(size)
            .bind(page.saturating_mul(size))
            .fetch_all(&self.pool)
            .await?;

        Ok((rows.iter().map(song_from_row).collect(), total))
    }

    /// Check whether a song with the given id exists
    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM songs WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Delete a song by id
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Case-insensitive substring search on title
    pub async fn find_by_title_containing(&self, term: &str) -> Result<Vec<Song>> {
        self.find_by_column_containing("title", term).await
    }

    /// Case-insensitive substring search on artist
    pub async fn find_by_artist_containing(&self, term: &str) -> Result<Vec<Song>> {
        self.find_by_column_containing("artist", term).await
    }

    /// Case-insensitive substring search on album
    pub async fn find_by_album_containing(&self, term: &str) -> Result<Vec<Song>> {
        self.find_by_column_containing("album", term).await
    }

    /// Combined case-insensitive substring search across title, artist and
    /// album. An empty term becomes `%%` and matches everything, so callers
    /// can leave individual fields blank as wildcards. The nullable album
    /// column is coalesced so the wildcard also covers songs with no album.
    pub async fn find_by_fields_containing(
        &self,
        title: &str,
        artist: &str,
        album: &str,
    ) -> Result<Vec<Song>> {
        let rows = sqlx::query(&format!(
            "SELECT {SONG_COLUMNS} FROM songs
             WHERE title LIKE ? ESCAPE '\\'
               AND artist LIKE ? ESCAPE '\\'
               AND IFNULL(album, '') LIKE ? ESCAPE '\\'
             ORDER BY id"
        ))
        .bind(like_pattern(title))
        .bind(like_pattern(artist))
        .bind(like_pattern(album))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(song_from_row).collect())
    }

    async fn find_by_column_containing(&self, column: &str, term: &str) -> Result<Vec<Song>> {
        // Column names come only from the fixed callers above.
        let rows = sqlx::query(&format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE {column} LIKE ? ESCAPE '\\' ORDER BY id"
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(song_from_row).collect())
    }
}

/// Wrap a term in `%` wildcards, escaping LIKE metacharacters so the term
/// itself always matches literally. The queries pair this with `ESCAPE '\'`.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn sort_column(field: &str) -> &'static str {
    match field {
        "id" => "id",
        "artist" => "artist",
        "album" => "album",
        "duration" => "duration",
        "releaseYear" | "release_year" => "release_year",
        _ => "title",
    }
}

fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        album: row.get("album"),
        duration: row.get("duration"),
        release_year: row.get("release_year"),
    }
}
