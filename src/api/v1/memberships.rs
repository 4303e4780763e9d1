//! Membership endpoint handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateMembershipBody, MembershipDto};

/// POST /v1/roles/memberships
pub async fn create_membership(
    State(state): State<AppState>,
    Json(body): Json<CreateMembershipBody>,
) -> Result<(StatusCode, Json<MembershipDto>), ApiError> {
    let new_membership = body.into_new_membership()?;

    let membership = state
        .membership_service
        .assign_role(new_membership)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MembershipDto::from_domain(&membership)),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSearchQuery {
    pub role_id: Uuid,
}

/// GET /v1/roles/memberships/search?roleId=..
pub async fn search_memberships(
    State(state): State<AppState>,
    Query(query): Query<MembershipSearchQuery>,
) -> Result<Json<Vec<MembershipDto>>, ApiError> {
    debug!(role_id = %query.role_id, "Listing memberships by role");

    let memberships = state
        .membership_service
        .get_memberships(query.role_id)
        .await?;

    Ok(Json(
        memberships.iter().map(MembershipDto::from_domain).collect(),
    ))
}
