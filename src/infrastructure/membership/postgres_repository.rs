//! PostgreSQL membership repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::membership::{Membership, MembershipRepository};
use crate::domain::{DomainError, Resource};

/// PostgreSQL implementation of MembershipRepository. The unique index on
/// (user_id, team_id) enforces at-most-one membership per pair even when
/// concurrent requests pass the service-level fast-path check.
#[derive(Debug, Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn insert(&self, membership: Membership) -> Result<Membership, DomainError> {
        sqlx::query(
            "INSERT INTO memberships (id, user_id, team_id, role_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(membership.id())
        .bind(membership.user_id())
        .bind(membership.team_id())
        .bind(membership.role_id())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::exists(Resource::Membership)
            } else {
                DomainError::storage(format!("Failed to insert membership: {}", e))
            }
        })?;

        Ok(membership)
    }

    async fn get_by_user_and_team(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<Membership>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_id, team_id, role_id FROM memberships \
             WHERE user_id = $1 AND team_id = $2",
        )
        .bind(user_id)
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get membership: {}", e)))?;

        Ok(row.map(|row| row_to_membership(&row)))
    }

    async fn get_by_role(&self, role_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, team_id, role_id FROM memberships WHERE role_id = $1",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list memberships: {}", e)))?;

        Ok(rows.iter().map(row_to_membership).collect())
    }
}

fn row_to_membership(row: &sqlx::postgres::PgRow) -> Membership {
    Membership::from_parts(
        row.get("id"),
        row.get("user_id"),
        row.get("team_id"),
        row.get("role_id"),
    )
}
