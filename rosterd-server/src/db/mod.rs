//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Related rows fetched with JOINs - no N+1 queries
//! - Integrity relies on DB constraints (FK on heroes.team_id)
//! - Every mutation is a single committed statement

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
