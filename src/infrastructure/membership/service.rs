//! Membership service: the validation-and-orchestration core

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::membership::{Membership, MembershipRepository, NewMembership};
use crate::domain::role::RoleRepository;
use crate::domain::team::TeamDirectory;
use crate::domain::user::UserDirectory;
use crate::domain::{DomainError, Resource};

/// Validates and persists memberships against the two stores and the two
/// external directories.
#[derive(Debug)]
pub struct MembershipService<M, R, T, U>
where
    M: MembershipRepository,
    R: RoleRepository,
    T: TeamDirectory,
    U: UserDirectory,
{
    membership_repository: Arc<M>,
    role_repository: Arc<R>,
    team_directory: Arc<T>,
    user_directory: Arc<U>,
}

impl<M, R, T, U> MembershipService<M, R, T, U>
where
    M: MembershipRepository,
    R: RoleRepository,
    T: TeamDirectory,
    U: UserDirectory,
{
    pub fn new(
        membership_repository: Arc<M>,
        role_repository: Arc<R>,
        team_directory: Arc<T>,
        user_directory: Arc<U>,
    ) -> Self {
        Self {
            membership_repository,
            role_repository,
            team_directory,
            user_directory,
        }
    }

    /// Assign a role to a (user, team) membership.
    ///
    /// The checks run strictly in this order and short-circuit on the
    /// first failure, so collaborators after a failing step are never
    /// called: role reference present, team exists, user exists, user
    /// belongs to the team, no membership for the pair yet, role exists,
    /// persist. External references are validated before any local store
    /// is touched, and the duplicate-pair check deliberately precedes the
    /// dangling-role check.
    pub async fn assign_role(
        &self,
        membership: NewMembership,
    ) -> Result<Membership, DomainError> {
        let role_id = membership
            .role_id
            .ok_or_else(|| DomainError::invalid_argument(Resource::Role))?;

        info!(
            user_id = %membership.user_id,
            team_id = %membership.team_id,
            role_id = %role_id,
            "Assigning role to membership"
        );

        let team = self
            .team_directory
            .get(membership.team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Team, membership.team_id))?;

        self.user_directory
            .get(membership.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::User, membership.user_id))?;

        if !team.includes_user(membership.user_id) {
            return Err(DomainError::InvalidMembership);
        }

        // Fast path only: the store's unique (user_id, team_id) constraint
        // is what makes the insert safe under concurrency.
        if self
            .membership_repository
            .get_by_user_and_team(membership.user_id, membership.team_id)
            .await?
            .is_some()
        {
            return Err(DomainError::exists(Resource::Membership));
        }

        self.role_repository
            .get_by_id(role_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Role, role_id))?;

        self.membership_repository
            .insert(Membership::new(
                membership.user_id,
                membership.team_id,
                role_id,
            ))
            .await
    }

    /// All memberships referencing the given role. The role must exist;
    /// a role with no memberships yields an empty list, not an error.
    pub async fn get_memberships(&self, role_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        debug!(role_id = %role_id, "Listing memberships by role");

        self.role_repository
            .get_by_id(role_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Role, role_id))?;

        self.membership_repository.get_by_role(role_id).await
    }
}
