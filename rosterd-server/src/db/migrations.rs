//! Startup table creation
//!
//! Tables are created at process startup if absent. `teams` must exist
//! before `heroes` because of the foreign key.

use sqlx::PgPool;

/// Create the roster tables if they don't exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running startup migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            headquarters TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS heroes (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            secret_name TEXT NOT NULL,
            age INTEGER,
            team_id BIGINT REFERENCES teams(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_heroes_team_id ON heroes(team_id)")
        .execute(pool)
        .await?;

    Ok(())
}
