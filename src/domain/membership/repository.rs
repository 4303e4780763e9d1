//! Membership repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use super::entity::Membership;
use crate::domain::DomainError;

/// Persistent membership catalog keyed by id, indexed on (user_id, team_id)
/// and on role_id.
///
/// `insert` must be an atomic insert-if-pair-absent; the service-level
/// pair lookup is only a fast path that produces a friendlier error before
/// the store constraint would trigger.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MembershipRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new membership, failing with `ResourceExists` when the
    /// (user_id, team_id) pair is already present
    async fn insert(&self, membership: Membership) -> Result<Membership, DomainError>;

    /// Exact-match lookup on the unique (user_id, team_id) pair
    async fn get_by_user_and_team(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<Membership>, DomainError>;

    /// All memberships referencing the given role
    async fn get_by_role(&self, role_id: Uuid) -> Result<Vec<Membership>, DomainError>;
}
