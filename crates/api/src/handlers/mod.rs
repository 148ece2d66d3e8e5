//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `trackstore_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod track;
