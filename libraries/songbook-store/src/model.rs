/// Song data model
use serde::{Deserialize, Serialize};

/// A persisted song. The id is assigned by the store at insert time and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    /// Duration in seconds
    pub duration: i64,
    pub release_year: i64,
}

/// Incoming song payload for create and update.
///
/// Every field is defaulted so that a missing JSON key lands in field
/// validation (blank title, zero duration) instead of failing to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub release_year: i64,
}

impl SongInput {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: Option<String>,
        duration: i64,
        release_year: i64,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album,
            duration,
            release_year,
        }
    }
}
