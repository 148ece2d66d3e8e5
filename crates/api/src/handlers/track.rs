//! Handlers for the `/tracks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use trackstore_core::error::CoreError;
use trackstore_core::types::DbId;
use trackstore_core::validation::invalid_fields;
use trackstore_db::models::track::{CreateTrack, Track, UpdateTrack, MISSING_REQUIRED_FIELDS};
use trackstore_db::repositories::TrackRepo;
use validator::Validate;

use crate::error::{AppError, AppResult, OperationContext};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Track",
        id,
    })
}

/// GET /api/tracks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Track>>> {
    let tracks = TrackRepo::list(&state.pool)
        .await
        .operation("Failed to fetch tracks")?;
    Ok(Json(tracks))
}

/// GET /api/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Track>> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await
        .operation("Failed to fetch track")?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(track))
}

/// POST /api/tracks
///
/// Rejects the payload with 400 before touching the database when any of
/// songTitle, artistName, albumName, or genre is missing or empty.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTrack>,
) -> AppResult<(StatusCode, Json<Track>)> {
    if let Err(errors) = input.validate() {
        tracing::debug!(fields = ?invalid_fields(&errors), "Rejected track payload");
        return Err(CoreError::Validation(MISSING_REQUIRED_FIELDS.to_string()).into());
    }

    let track = TrackRepo::create(&state.pool, &input)
        .await
        .operation("Failed to create track")?;
    tracing::info!(track_id = track.id, "Track created");
    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /api/tracks/{id}
///
/// Applies only the supplied fields; `null` clears `duration` or
/// `releaseYear`. An empty body against an existing track is a no-op that
/// still returns the track.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTrack>,
) -> AppResult<Json<Track>> {
    let track = TrackRepo::update(&state.pool, id, &input)
        .await
        .operation("Failed to update track")?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(track_id = id, "Track updated");
    Ok(Json(track))
}

/// DELETE /api/tracks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TrackRepo::delete(&state.pool, id)
        .await
        .operation("Failed to delete track")?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(track_id = id, "Track deleted");
    Ok(Json(MessageResponse {
        message: "Track deleted successfully",
    }))
}
