//! Team directory pass-through handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{DomainError, Resource, Team};

/// GET /v1/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    debug!("Listing all teams");

    let teams = state.team_directory.get_all().await?;
    Ok(Json(teams))
}

/// GET /v1/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Team>, ApiError> {
    debug!(team_id = %team_id, "Getting team");

    let team = state
        .team_directory
        .get(team_id)
        .await?
        .ok_or_else(|| DomainError::not_found(Resource::Team, team_id))?;

    Ok(Json(team))
}
