//! Repository implementations for database access

pub mod heroes;
pub mod teams;

pub use heroes::{Hero, HeroRepo, HeroWithTeam};
pub use teams::{Team, TeamRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },
}
