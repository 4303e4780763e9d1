//! PostgreSQL role repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::role::{Role, RoleRepository};
use crate::domain::{DomainError, Resource};

/// PostgreSQL implementation of RoleRepository. The `roles.name` unique
/// index is the real uniqueness guarantee; duplicate-key failures map to
/// `ResourceExists`.
#[derive(Debug, Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn insert(&self, role: Role) -> Result<Role, DomainError> {
        sqlx::query("INSERT INTO roles (id, name) VALUES ($1, $2)")
            .bind(role.id())
            .bind(role.name())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let msg = e.to_string();

                if msg.contains("duplicate key") || msg.contains("unique constraint") {
                    DomainError::exists(Resource::Role)
                } else {
                    DomainError::storage(format!("Failed to insert role: {}", e))
                }
            })?;

        Ok(role)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Role>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get role: {}", e)))?;

        Ok(row.map(|row| row_to_role(&row)))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get role by name: {}", e)))?;

        Ok(row.map(|row| row_to_role(&row)))
    }

    async fn get_all(&self) -> Result<Vec<Role>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM roles")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list roles: {}", e)))?;

        Ok(rows.iter().map(row_to_role).collect())
    }
}

fn row_to_role(row: &sqlx::postgres::PgRow) -> Role {
    Role::from_parts(row.get("id"), row.get("name"))
}
