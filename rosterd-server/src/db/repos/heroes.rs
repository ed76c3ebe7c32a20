//! Hero repository
//!
//! Single-get also loads the hero's team through a LEFT JOIN so the
//! handler never issues a second query.

use sqlx::{FromRow, PgPool, Row};

use crate::models::{HeroPatch, NewHero, Page};

use super::teams::Team;
use super::DbError;

/// Hero record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
}

/// Hero plus its team (if any) for single-get display
#[derive(Debug, Clone)]
pub struct HeroWithTeam {
    pub hero: Hero,
    pub team: Option<Team>,
}

/// Hero repository
pub struct HeroRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> HeroRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a hero, returning the row with its generated id.
    pub async fn insert(&self, hero: NewHero) -> Result<Hero, DbError> {
        let hero: Hero = sqlx::query_as(
            r#"
            INSERT INTO heroes (name, secret_name, age, team_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, secret_name, age, team_id
            "#,
        )
        .bind(hero.name.as_str())
        .bind(hero.secret_name.as_str())
        .bind(hero.age)
        .bind(hero.team_id)
        .fetch_one(self.pool)
        .await?;

        Ok(hero)
    }

    /// List heroes in insertion order.
    pub async fn list(&self, page: Page) -> Result<Vec<Hero>, DbError> {
        let heroes: Vec<Hero> = sqlx::query_as(
            r#"
            SELECT id, name, secret_name, age, team_id
            FROM heroes
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(heroes)
    }

    /// Get a single hero by id.
    pub async fn get(&self, id: i64) -> Result<Hero, DbError> {
        let hero: Hero = sqlx::query_as(
            "SELECT id, name, secret_name, age, team_id FROM heroes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "hero",
            id,
        })?;

        Ok(hero)
    }

    /// Get a hero together with its team in a single query.
    pub async fn get_with_team(&self, id: i64) -> Result<HeroWithTeam, DbError> {
        let row = sqlx::query(
            r#"
            SELECT
                h.id, h.name, h.secret_name, h.age, h.team_id,
                t.name AS team_name, t.headquarters AS team_headquarters
            FROM heroes h
            LEFT JOIN teams t ON t.id = h.team_id
            WHERE h.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "hero",
            id,
        })?;

        let hero = Hero {
            id: row.get("id"),
            name: row.get("name"),
            secret_name: row.get("secret_name"),
            age: row.get("age"),
            team_id: row.get("team_id"),
        };

        let team = hero.team_id.map(|team_id| Team {
            id: team_id,
            name: row.get("team_name"),
            headquarters: row.get("team_headquarters"),
        });

        Ok(HeroWithTeam { hero, team })
    }

    /// Apply a partial update: only fields present in the patch overwrite
    /// stored values. An empty patch is a no-op beyond the existence check.
    pub async fn update(&self, id: i64, patch: HeroPatch) -> Result<Hero, DbError> {
        let mut hero = self.get(id).await?;

        if patch.is_empty() {
            return Ok(hero);
        }

        if let Some(name) = patch.name {
            hero.name = name.into_string();
        }
        if let Some(secret_name) = patch.secret_name {
            hero.secret_name = secret_name.into_string();
        }
        if let Some(age) = patch.age {
            hero.age = age;
        }
        if let Some(team_id) = patch.team_id {
            hero.team_id = team_id;
        }

        let hero: Hero = sqlx::query_as(
            r#"
            UPDATE heroes
            SET name = $1, secret_name = $2, age = $3, team_id = $4
            WHERE id = $5
            RETURNING id, name, secret_name, age, team_id
            "#,
        )
        .bind(&hero.name)
        .bind(&hero.secret_name)
        .bind(hero.age)
        .bind(hero.team_id)
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(hero)
    }

    /// Delete a hero by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "hero",
                id,
            });
        }

        Ok(())
    }
}
