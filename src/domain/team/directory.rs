//! Team directory lookup trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use super::entity::Team;
use crate::domain::DomainError;

/// Read-only lookup of teams from the external directory.
///
/// `get` returns `Ok(None)` only for a confirmed absence (not-found
/// response or empty body). A transport failure is surfaced as
/// `DomainError::DirectoryUnavailable` and must never be collapsed into
/// absence.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamDirectory: Send + Sync + std::fmt::Debug {
    async fn get(&self, id: Uuid) -> Result<Option<Team>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Team>, DomainError>;
}
