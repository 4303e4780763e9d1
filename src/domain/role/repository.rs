//! Role repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use super::entity::Role;
use crate::domain::DomainError;

/// Persistent role catalog keyed by id with a name-uniqueness index.
///
/// `insert` must be an atomic insert-if-name-absent: the store constraint,
/// not the caller's pre-check, is what guarantees uniqueness under
/// concurrent inserts.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new role, failing with `ResourceExists` on a duplicate name
    async fn insert(&self, role: Role) -> Result<Role, DomainError>;

    /// Get a role by id
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Role>, DomainError>;

    /// Get a role by its unique name
    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, DomainError>;

    /// All roles, complete snapshot, order unspecified
    async fn get_all(&self) -> Result<Vec<Role>, DomainError>;
}
