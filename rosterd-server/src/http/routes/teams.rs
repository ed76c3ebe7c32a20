//! Team endpoints
//!
//! Symmetric to the hero endpoints, without the nested expansion on
//! single-get.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{Team, TeamRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidPage;
use crate::http::server::AppState;
use crate::models::{Headquarters, NewTeam, TeamName, TeamPatch, ValidationError};

/// Create team request
#[derive(Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub headquarters: String,
}

impl CreateTeamRequest {
    fn into_new_team(self) -> Result<NewTeam, ValidationError> {
        Ok(NewTeam {
            name: TeamName::new(&self.name)?,
            headquarters: Headquarters::new(&self.headquarters)?,
        })
    }
}

/// Partial update request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTeamRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headquarters: Option<String>,
}

impl UpdateTeamRequest {
    fn into_patch(self) -> Result<TeamPatch, ValidationError> {
        Ok(TeamPatch {
            name: self.name.as_deref().map(TeamName::new).transpose()?,
            headquarters: self
                .headquarters
                .as_deref()
                .map(Headquarters::new)
                .transpose()?,
        })
    }
}

/// Team response
#[derive(Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub headquarters: String,
}

impl From<Team> for TeamResponse {
    fn from(t: Team) -> Self {
        Self {
            id: t.id,
            name: t.name,
            headquarters: t.headquarters,
        }
    }
}

/// GET /teams - list teams
async fn list_teams(
    State(state): State<Arc<AppState>>,
    ValidPage(page): ValidPage,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = TeamRepo::new(&state.pool).list(page).await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// POST /teams - create a team
async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = req.into_new_team()?;
    let team = TeamRepo::new(&state.pool).insert(team).await?;

    Ok(Json(TeamResponse::from(team)))
}

/// GET /teams/{id} - get a single team
async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = TeamRepo::new(&state.pool).get(id).await?;
    Ok(Json(TeamResponse::from(team)))
}

/// PATCH /teams/{id} - apply a partial update
async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let patch = req.into_patch()?;
    let team = TeamRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(TeamResponse::from(team)))
}

/// DELETE /teams/{id}
async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    TeamRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "Team deleted successfully" })))
}

/// Team routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/{id}",
            get(get_team).patch(update_team).delete(delete_team),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_headquarters() {
        let result: Result<CreateTeamRequest, _> =
            serde_json::from_str(r#"{"name": "Preventers"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_keeps_absent_fields() {
        let req: UpdateTeamRequest =
            serde_json::from_str(r#"{"headquarters": "Sharp Tower"}"#).unwrap();
        let patch = req.into_patch().unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.headquarters.unwrap().as_str(), "Sharp Tower");
    }

    #[test]
    fn patch_validates_headquarters() {
        let req: UpdateTeamRequest = serde_json::from_str(r#"{"headquarters": ""}"#).unwrap();
        assert!(matches!(
            req.into_patch().unwrap_err(),
            ValidationError::Empty {
                field: "headquarters"
            }
        ));
    }
}
