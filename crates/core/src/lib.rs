//! Domain types shared by the trackstore crates.
//!
//! Nothing in here performs I/O; the `db` and `api` crates build on these
//! building blocks.

pub mod error;
pub mod types;
pub mod validation;
