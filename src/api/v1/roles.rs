//! Role endpoint handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateRoleBody, RoleDto};

/// POST /v1/roles
pub async fn create_role(
    State(state): State<AppState>,
    Json(body): Json<CreateRoleBody>,
) -> Result<(StatusCode, Json<RoleDto>), ApiError> {
    let role = state.role_service.create_role(body.into_request()).await?;

    Ok((StatusCode::CREATED, Json(RoleDto::from_domain(&role))))
}

/// GET /v1/roles
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<RoleDto>>, ApiError> {
    debug!("Listing all roles");

    let roles = state.role_service.get_roles().await?;
    Ok(Json(roles.iter().map(RoleDto::from_domain).collect()))
}

/// Query parameters for resolving a role from a (user, team) pair
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchQuery {
    pub team_member_id: Uuid,
    pub team_id: Uuid,
}

/// GET /v1/roles/search?teamMemberId=..&teamId=..
///
/// Registered before the `{role_id}` path so "search" is not parsed as an
/// id.
pub async fn search_role(
    State(state): State<AppState>,
    Query(query): Query<RoleSearchQuery>,
) -> Result<Json<RoleDto>, ApiError> {
    debug!(user_id = %query.team_member_id, team_id = %query.team_id, "Searching role by membership");

    let role = state
        .role_service
        .get_role_by_user_and_team(query.team_member_id, query.team_id)
        .await?;

    Ok(Json(RoleDto::from_domain(&role)))
}

/// GET /v1/roles/{role_id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(role_id): Path<Uuid>,
) -> Result<Json<RoleDto>, ApiError> {
    debug!(role_id = %role_id, "Getting role");

    let role = state.role_service.get_role(role_id).await?;
    Ok(Json(RoleDto::from_domain(&role)))
}
