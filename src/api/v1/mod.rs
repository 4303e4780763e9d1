//! /v1 API: roles, memberships, and directory pass-through lookups

pub mod memberships;
pub mod roles;
pub mod teams;
pub mod users;

use axum::routing::{get, post};
use axum::Router;

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/roles", post(roles::create_role).get(roles::list_roles))
        // Literal segments before the id capture so they are not parsed
        // as role ids.
        .route("/roles/search", get(roles::search_role))
        .route(
            "/roles/memberships",
            post(memberships::create_membership),
        )
        .route(
            "/roles/memberships/search",
            get(memberships::search_memberships),
        )
        .route("/roles/{role_id}", get(roles::get_role))
        .route("/teams", get(teams::list_teams))
        .route("/teams/{team_id}", get(teams::get_team))
        .route("/users", get(users::list_users))
        .route("/users/{user_id}", get(users::get_user))
}
