//! Repository for the `tracks` table.

use sqlx::PgPool;
use trackstore_core::types::DbId;

use crate::models::track::{CreateTrack, Track, UpdateTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, song_title, artist_name, album_name, genre, duration, release_year, \
                       created_at, updated_at";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (song_title, artist_name, album_name, genre, duration, release_year) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.song_title)
            .bind(&input.artist_name)
            .bind(&input.album_name)
            .bind(&input.genre)
            .bind(input.duration)
            .bind(input.release_year)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// Update a track. Only supplied fields are applied; `updated_at` is
    /// always refreshed. `Some(None)` on `duration` or `release_year` clears
    /// the column.
    ///
    /// Returns `None` only if no row with the given `id` exists, so an empty
    /// update against an existing track still returns that track.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                song_title = COALESCE($2, song_title), \
                artist_name = COALESCE($3, artist_name), \
                album_name = COALESCE($4, album_name), \
                genre = COALESCE($5, genre), \
                duration = CASE WHEN $7 THEN $6 ELSE duration END, \
                release_year = CASE WHEN $9 THEN $8 ELSE release_year END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.song_title)
            .bind(&input.artist_name)
            .bind(&input.album_name)
            .bind(&input.genre)
            .bind(input.duration.flatten())
            .bind(input.duration.is_some())
            .bind(input.release_year.flatten())
            .bind(input.release_year.is_some())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a track by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
