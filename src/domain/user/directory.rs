//! User directory lookup trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use super::entity::User;
use crate::domain::DomainError;

/// Read-only lookup of users from the external directory. Same
/// present/absent contract as `TeamDirectory`: `Ok(None)` means confirmed
/// absence, transport failures are `DirectoryUnavailable`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    async fn get_all(&self) -> Result<Vec<User>, DomainError>;
}
