//! PostgreSQL pool construction and schema setup

use sqlx::PgPool;

use crate::domain::DomainError;

/// Connect to PostgreSQL with the given connection string
pub async fn connect(database_url: &str) -> Result<PgPool, DomainError> {
    PgPool::connect(database_url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// Idempotent schema creation. The unique indexes here are the authoritative
/// uniqueness constraints for role names and (user, team) membership pairs.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS roles (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DomainError::storage(format!("Failed to create roles table: {}", e)))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS memberships (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            team_id UUID NOT NULL,
            role_id UUID NOT NULL,
            UNIQUE (user_id, team_id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DomainError::storage(format!("Failed to create memberships table: {}", e)))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_memberships_role_id ON memberships (role_id)")
        .execute(pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create role index: {}", e)))?;

    Ok(())
}
