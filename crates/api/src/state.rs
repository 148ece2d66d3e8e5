/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` and cloned into every request; the pool is
/// internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trackstore_db::DbPool,
}
