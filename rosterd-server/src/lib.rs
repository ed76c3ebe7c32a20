//! rosterd-server: HTTP CRUD service for the hero and team roster
//!
//! Exposes create/read/update/delete over heroes and teams backed by
//! PostgreSQL. Heroes may reference a team; single-get on a hero also
//! returns the team it belongs to.

pub mod db;
pub mod http;
pub mod models;

pub use http::error::ApiError;
pub use http::server::{build_router, run_server, AppState, ServerConfig};
