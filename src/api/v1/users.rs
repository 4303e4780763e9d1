//! User directory pass-through handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{DomainError, Resource, User};

/// GET /v1/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_directory.get_all().await?;
    Ok(Json(users))
}

/// GET /v1/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state
        .user_directory
        .get(user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(Resource::User, user_id))?;

    Ok(Json(user))
}
