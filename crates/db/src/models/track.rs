//! Track entity model and DTOs.
//!
//! JSON field names are camelCase with the primary key exposed as
//! `trackID`; the table itself uses snake_case columns.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use trackstore_core::types::{DbId, Timestamp};
use validator::Validate;

/// Message returned when a create payload lacks one of the required fields.
pub const MISSING_REQUIRED_FIELDS: &str =
    "Missing required fields. songTitle, artistName, albumName, and genre are required.";

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(rename = "trackID")]
    pub id: DbId,
    pub song_title: String,
    pub artist_name: String,
    pub album_name: String,
    pub genre: String,
    /// Length in seconds.
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new track.
///
/// Required fields default to the empty string when absent or `null`, so
/// "missing" and "empty" fail the same `length(min = 1)` check.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTrack {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub song_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub artist_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub album_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub genre: String,
    pub duration: Option<i32>,
    pub release_year: Option<i32>,
}

/// DTO for updating an existing track. All fields optional; the id is immutable.
///
/// An absent key leaves the column unchanged. For the nullable columns
/// (`duration`, `releaseYear`) an explicit `null` clears the value, so those
/// fields are `Some(None)`; on the text columns `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    pub song_title: Option<String>,
    pub artist_name: Option<String>,
    pub album_name: Option<String>,
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub duration: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub release_year: Option<Option<i32>>,
}

/// Marks a key that appeared in the payload, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
