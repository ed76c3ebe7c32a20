//! Hero endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{Hero, HeroRepo, HeroWithTeam};
use crate::http::error::ApiError;
use crate::http::extractors::ValidPage;
use crate::http::server::AppState;
use crate::models::{HeroName, HeroPatch, NewHero, SecretName, ValidationError};

use super::double_option;
use super::teams::TeamResponse;

/// Create hero request
#[derive(Deserialize)]
pub struct CreateHeroRequest {
    pub name: String,
    pub secret_name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub team_id: Option<i64>,
}

impl CreateHeroRequest {
    fn into_new_hero(self) -> Result<NewHero, ValidationError> {
        Ok(NewHero {
            name: HeroName::new(&self.name)?,
            secret_name: SecretName::new(&self.secret_name)?,
            age: self.age,
            team_id: self.team_id,
        })
    }
}

/// Partial update request; only fields present in the body are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateHeroRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub secret_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub team_id: Option<Option<i64>>,
}

impl UpdateHeroRequest {
    fn into_patch(self) -> Result<HeroPatch, ValidationError> {
        Ok(HeroPatch {
            name: self.name.as_deref().map(HeroName::new).transpose()?,
            secret_name: self.secret_name.as_deref().map(SecretName::new).transpose()?,
            age: self.age,
            team_id: self.team_id,
        })
    }
}

/// Hero response
#[derive(Serialize)]
pub struct HeroResponse {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
}

impl From<Hero> for HeroResponse {
    fn from(h: Hero) -> Self {
        Self {
            id: h.id,
            name: h.name,
            secret_name: h.secret_name,
            age: h.age,
            team_id: h.team_id,
        }
    }
}

/// Hero response with its team expanded (single-get only)
#[derive(Serialize)]
pub struct HeroWithTeamResponse {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
    pub team: Option<TeamResponse>,
}

impl From<HeroWithTeam> for HeroWithTeamResponse {
    fn from(h: HeroWithTeam) -> Self {
        Self {
            id: h.hero.id,
            name: h.hero.name,
            secret_name: h.hero.secret_name,
            age: h.hero.age,
            team_id: h.hero.team_id,
            team: h.team.map(TeamResponse::from),
        }
    }
}

/// GET /heroes - list heroes
async fn list_heroes(
    State(state): State<Arc<AppState>>,
    ValidPage(page): ValidPage,
) -> Result<Json<Vec<HeroResponse>>, ApiError> {
    let heroes = HeroRepo::new(&state.pool).list(page).await?;
    Ok(Json(heroes.into_iter().map(HeroResponse::from).collect()))
}

/// POST /heroes - create a hero
async fn create_hero(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateHeroRequest>,
) -> Result<Json<HeroResponse>, ApiError> {
    let hero = req.into_new_hero()?;
    let hero = HeroRepo::new(&state.pool).insert(hero).await?;

    Ok(Json(HeroResponse::from(hero)))
}

/// GET /heroes/{id} - get a single hero with its team
async fn get_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<HeroWithTeamResponse>, ApiError> {
    let hero = HeroRepo::new(&state.pool).get_with_team(id).await?;
    Ok(Json(HeroWithTeamResponse::from(hero)))
}

/// PATCH /heroes/{id} - apply a partial update
async fn update_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateHeroRequest>,
) -> Result<Json<HeroResponse>, ApiError> {
    let patch = req.into_patch()?;
    let hero = HeroRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(HeroResponse::from(hero)))
}

/// DELETE /heroes/{id}
async fn delete_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    HeroRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "Hero deleted successfully" })))
}

/// Hero routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route(
            "/heroes/{id}",
            get(get_hero).patch(update_hero).delete(delete_hero),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_no_fields() {
        let req: UpdateHeroRequest = serde_json::from_str("{}").unwrap();
        let patch = req.into_patch().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn absent_and_null_age_differ() {
        let req: UpdateHeroRequest = serde_json::from_str(r#"{"age": 30}"#).unwrap();
        assert_eq!(req.age, Some(Some(30)));

        let req: UpdateHeroRequest = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert_eq!(req.age, Some(None));

        let req: UpdateHeroRequest = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert_eq!(req.age, None);
    }

    #[test]
    fn null_team_id_clears() {
        let req: UpdateHeroRequest = serde_json::from_str(r#"{"team_id": null}"#).unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.team_id, Some(None));
    }

    #[test]
    fn patch_validates_name() {
        let req: UpdateHeroRequest = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert!(matches!(
            req.into_patch().unwrap_err(),
            ValidationError::Empty { field: "name" }
        ));
    }

    #[test]
    fn create_request_requires_names() {
        let result: Result<CreateHeroRequest, _> =
            serde_json::from_str(r#"{"name": "Deadpond"}"#);
        assert!(result.is_err());

        let req: CreateHeroRequest =
            serde_json::from_str(r#"{"name": "Deadpond", "secret_name": "Dive Wilson"}"#).unwrap();
        let hero = req.into_new_hero().unwrap();
        assert_eq!(hero.name.as_str(), "Deadpond");
        assert_eq!(hero.age, None);
        assert_eq!(hero.team_id, None);
    }
}
