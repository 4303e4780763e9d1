//! Application state for shared services

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::membership::MembershipRepository;
use crate::domain::role::RoleRepository;
use crate::domain::team::TeamDirectory;
use crate::domain::user::UserDirectory;
use crate::domain::{DomainError, Membership, NewMembership, Role};
use crate::infrastructure::membership::MembershipService;
use crate::infrastructure::role::{CreateRoleRequest, RoleCatalogService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub role_service: Arc<dyn RoleServiceTrait>,
    pub membership_service: Arc<dyn MembershipServiceTrait>,
    pub team_directory: Arc<dyn TeamDirectory>,
    pub user_directory: Arc<dyn UserDirectory>,
}

/// Trait for role catalog operations
#[async_trait::async_trait]
pub trait RoleServiceTrait: Send + Sync {
    async fn create_role(&self, request: CreateRoleRequest) -> Result<Role, DomainError>;
    async fn get_role(&self, role_id: Uuid) -> Result<Role, DomainError>;
    async fn get_roles(&self) -> Result<Vec<Role>, DomainError>;
    async fn get_role_by_user_and_team(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Role, DomainError>;
}

/// Trait for membership operations
#[async_trait::async_trait]
pub trait MembershipServiceTrait: Send + Sync {
    async fn assign_role(&self, membership: NewMembership) -> Result<Membership, DomainError>;
    async fn get_memberships(&self, role_id: Uuid) -> Result<Vec<Membership>, DomainError>;
}

#[async_trait::async_trait]
impl<R, M, T, U> RoleServiceTrait for RoleCatalogService<R, M, T, U>
where
    R: RoleRepository + 'static,
    M: MembershipRepository + 'static,
    T: TeamDirectory + 'static,
    U: UserDirectory + 'static,
{
    async fn create_role(&self, request: CreateRoleRequest) -> Result<Role, DomainError> {
        RoleCatalogService::create_role(self, request).await
    }

    async fn get_role(&self, role_id: Uuid) -> Result<Role, DomainError> {
        RoleCatalogService::get_role(self, role_id).await
    }

    async fn get_roles(&self) -> Result<Vec<Role>, DomainError> {
        RoleCatalogService::get_roles(self).await
    }

    async fn get_role_by_user_and_team(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Role, DomainError> {
        RoleCatalogService::get_role_by_user_and_team(self, user_id, team_id).await
    }
}

#[async_trait::async_trait]
impl<M, R, T, U> MembershipServiceTrait for MembershipService<M, R, T, U>
where
    M: MembershipRepository + 'static,
    R: RoleRepository + 'static,
    T: TeamDirectory + 'static,
    U: UserDirectory + 'static,
{
    async fn assign_role(&self, membership: NewMembership) -> Result<Membership, DomainError> {
        MembershipService::assign_role(self, membership).await
    }

    async fn get_memberships(&self, role_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        MembershipService::get_memberships(self, role_id).await
    }
}
