//! Team repository

use sqlx::{FromRow, PgPool};

use crate::models::{NewTeam, Page, TeamPatch};

use super::DbError;

/// Team record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub headquarters: String,
}

/// Team repository
pub struct TeamRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a team, returning the row with its generated id.
    pub async fn insert(&self, team: NewTeam) -> Result<Team, DbError> {
        let team: Team = sqlx::query_as(
            r#"
            INSERT INTO teams (name, headquarters)
            VALUES ($1, $2)
            RETURNING id, name, headquarters
            "#,
        )
        .bind(team.name.as_str())
        .bind(team.headquarters.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(team)
    }

    /// List teams in insertion order.
    pub async fn list(&self, page: Page) -> Result<Vec<Team>, DbError> {
        let teams: Vec<Team> = sqlx::query_as(
            r#"
            SELECT id, name, headquarters
            FROM teams
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Get a single team by id.
    pub async fn get(&self, id: i64) -> Result<Team, DbError> {
        let team: Team = sqlx::query_as("SELECT id, name, headquarters FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "team",
                id,
            })?;

        Ok(team)
    }

    /// Apply a partial update: only fields present in the patch overwrite
    /// stored values.
    pub async fn update(&self, id: i64, patch: TeamPatch) -> Result<Team, DbError> {
        let mut team = self.get(id).await?;

        if patch.is_empty() {
            return Ok(team);
        }

        if let Some(name) = patch.name {
            team.name = name.into_string();
        }
        if let Some(headquarters) = patch.headquarters {
            team.headquarters = headquarters.into_string();
        }

        let team: Team = sqlx::query_as(
            r#"
            UPDATE teams
            SET name = $1, headquarters = $2
            WHERE id = $3
            RETURNING id, name, headquarters
            "#,
        )
        .bind(&team.name)
        .bind(&team.headquarters)
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(team)
    }

    /// Delete a team by id. Heroes still referencing the team make the
    /// delete fail on the foreign key; that surfaces as a storage error.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "team",
                id,
            });
        }

        Ok(())
    }
}
