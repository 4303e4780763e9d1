//! Role catalog service

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::membership::MembershipRepository;
use crate::domain::role::{Role, RoleRepository};
use crate::domain::team::TeamDirectory;
use crate::domain::user::UserDirectory;
use crate::domain::{DomainError, Resource};

/// Request for creating a new role. The name is optional here so that a
/// missing name reaches the service as a domain error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct CreateRoleRequest {
    pub name: Option<String>,
}

/// Creates and retrieves roles; sole writer and reader of the role store.
/// Also resolves a role back from a (user, team) pair, which is why it
/// holds the membership store and both directories.
#[derive(Debug)]
pub struct RoleCatalogService<R, M, T, U>
where
    R: RoleRepository,
    M: MembershipRepository,
    T: TeamDirectory,
    U: UserDirectory,
{
    role_repository: Arc<R>,
    membership_repository: Arc<M>,
    team_directory: Arc<T>,
    user_directory: Arc<U>,
}

impl<R, M, T, U> RoleCatalogService<R, M, T, U>
where
    R: RoleRepository,
    M: MembershipRepository,
    T: TeamDirectory,
    U: UserDirectory,
{
    pub fn new(
        role_repository: Arc<R>,
        membership_repository: Arc<M>,
        team_directory: Arc<T>,
        user_directory: Arc<U>,
    ) -> Self {
        Self {
            role_repository,
            membership_repository,
            team_directory,
            user_directory,
        }
    }

    /// Create a new role. Fails with `InvalidArgument` on a missing or
    /// blank name and `ResourceExists` on a duplicate. The pre-check via
    /// `get_by_name` is a fast path; the store's unique constraint is the
    /// actual guarantee.
    pub async fn create_role(&self, request: CreateRoleRequest) -> Result<Role, DomainError> {
        let name = request
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| DomainError::invalid_argument(Resource::Role))?;

        info!(name = %name, "Creating role");

        if self.role_repository.get_by_name(&name).await?.is_some() {
            return Err(DomainError::exists(Resource::Role));
        }

        let role = Role::new(name)?;
        self.role_repository.insert(role).await
    }

    /// Get a role by id
    pub async fn get_role(&self, role_id: Uuid) -> Result<Role, DomainError> {
        self.role_repository
            .get_by_id(role_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Role, role_id))
    }

    /// All roles, complete snapshot at call time
    pub async fn get_roles(&self) -> Result<Vec<Role>, DomainError> {
        self.role_repository.get_all().await
    }

    /// Resolve the role assigned to a (user, team) pair by traversing
    /// membership -> role. Checks run in a fixed order so each absence
    /// produces a distinct not-found outcome: team, user, membership,
    /// role. Membership validity is not re-checked here; it was enforced
    /// at creation time.
    pub async fn get_role_by_user_and_team(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Role, DomainError> {
        debug!(user_id = %user_id, team_id = %team_id, "Resolving role for membership");

        self.team_directory
            .get(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Team, team_id))?;

        self.user_directory
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::User, user_id))?;

        // The pair is not a single addressable resource, so this message
        // carries no id.
        let membership = self
            .membership_repository
            .get_by_user_and_team(user_id, team_id)
            .await?
            .ok_or_else(|| DomainError::not_found_anonymous(Resource::Membership))?;

        let role_id = membership.role_id();
        self.role_repository
            .get_by_id(role_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Role, role_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::{Membership, MockMembershipRepository};
    use crate::domain::role::MockRoleRepository;
    use crate::domain::team::{MockTeamDirectory, Team};
    use crate::domain::user::{MockUserDirectory, User};
    use crate::infrastructure::membership::InMemoryMembershipRepository;
    use crate::infrastructure::role::InMemoryRoleRepository;
    use mockall::predicate::eq;

    type InMemoryService = RoleCatalogService<
        InMemoryRoleRepository,
        InMemoryMembershipRepository,
        MockTeamDirectory,
        MockUserDirectory,
    >;

    fn service_with_directories(
        team_directory: MockTeamDirectory,
        user_directory: MockUserDirectory,
    ) -> InMemoryService {
        RoleCatalogService::new(
            Arc::new(InMemoryRoleRepository::new()),
            Arc::new(InMemoryMembershipRepository::new()),
            Arc::new(team_directory),
            Arc::new(user_directory),
        )
    }

    fn create_service() -> InMemoryService {
        service_with_directories(MockTeamDirectory::new(), MockUserDirectory::new())
    }

    fn named(name: &str) -> CreateRoleRequest {
        CreateRoleRequest {
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_role() {
        let service = create_service();

        let role = service.create_role(named("DevOps")).await.unwrap();
        assert!(!role.id().is_nil());
        assert_eq!(role.name(), "DevOps");

        let roles = service.get_roles().await.unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name(), "DevOps");
    }

    #[tokio::test]
    async fn test_create_role_missing_name() {
        let service = create_service();

        let result = service.create_role(CreateRoleRequest::default()).await;
        assert!(matches!(
            result,
            Err(DomainError::InvalidArgument {
                resource: Resource::Role
            })
        ));
    }

    #[tokio::test]
    async fn test_create_role_blank_name() {
        let service = create_service();

        let result = service.create_role(named("   ")).await;
        assert!(matches!(result, Err(DomainError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn test_create_duplicate_role() {
        let service = create_service();
        service.create_role(named("DevOps")).await.unwrap();

        let result = service.create_role(named("DevOps")).await;
        assert!(matches!(
            result,
            Err(DomainError::ResourceExists {
                resource: Resource::Role
            })
        ));
    }

    #[tokio::test]
    async fn test_get_role() {
        let service = create_service();
        let role = service.create_role(named("Tester")).await.unwrap();

        let fetched = service.get_role(role.id()).await.unwrap();
        assert_eq!(fetched, role);
    }

    #[tokio::test]
    async fn test_get_missing_role() {
        let service = create_service();
        let role_id = Uuid::new_v4();

        let result = service.get_role(role_id).await;
        assert!(matches!(
            result,
            Err(DomainError::ResourceNotFound {
                resource: Resource::Role,
                id: Some(id)
            }) if id == role_id
        ));
    }

    #[tokio::test]
    async fn test_resolve_role_for_pair() {
        let user_id = Uuid::new_v4();
        let team_id = Uuid::new_v4();

        let mut team_directory = MockTeamDirectory::new();
        team_directory.expect_get().with(eq(team_id)).returning(move |id| {
            Ok(Some(Team::new(id, "Ordinary Coral Lynx", user_id, vec![])))
        });

        let mut user_directory = MockUserDirectory::new();
        user_directory
            .expect_get()
            .with(eq(user_id))
            .returning(|id| Ok(Some(User::new(id))));

        let service = service_with_directories(team_directory, user_directory);
        let role = service.create_role(named("Developer")).await.unwrap();
        service
            .membership_repository
            .insert(Membership::new(user_id, team_id, role.id()))
            .await
            .unwrap();

        let resolved = service
            .get_role_by_user_and_team(user_id, team_id)
            .await
            .unwrap();
        assert_eq!(resolved, role);
    }

    #[tokio::test]
    async fn test_resolve_fails_when_team_missing_before_user_lookup() {
        let mut team_directory = MockTeamDirectory::new();
        team_directory.expect_get().returning(|_| Ok(None));

        // No expectations on the user directory: a lookup would panic.
        let user_directory = MockUserDirectory::new();

        let service = service_with_directories(team_directory, user_directory);
        let team_id = Uuid::new_v4();

        let result = service
            .get_role_by_user_and_team(Uuid::new_v4(), team_id)
            .await;
        assert!(matches!(
            result,
            Err(DomainError::ResourceNotFound {
                resource: Resource::Team,
                id: Some(id)
            }) if id == team_id
        ));
    }

    #[tokio::test]
    async fn test_resolve_fails_when_user_missing() {
        let mut team_directory = MockTeamDirectory::new();
        team_directory
            .expect_get()
            .returning(|id| Ok(Some(Team::new(id, "Ordinary Coral Lynx", Uuid::new_v4(), vec![]))));

        let mut user_directory = MockUserDirectory::new();
        user_directory.expect_get().returning(|_| Ok(None));

        let service = service_with_directories(team_directory, user_directory);
        let user_id = Uuid::new_v4();

        let result = service
            .get_role_by_user_and_team(user_id, Uuid::new_v4())
            .await;
        assert!(matches!(
            result,
            Err(DomainError::ResourceNotFound {
                resource: Resource::User,
                id: Some(id)
            }) if id == user_id
        ));
    }

    #[tokio::test]
    async fn test_resolve_fails_when_membership_missing() {
        let user_id = Uuid::new_v4();

        let mut team_directory = MockTeamDirectory::new();
        team_directory
            .expect_get()
            .returning(move |id| Ok(Some(Team::new(id, "Ordinary Coral Lynx", user_id, vec![]))));

        let mut user_directory = MockUserDirectory::new();
        user_directory.expect_get().returning(|id| Ok(Some(User::new(id))));

        let service = service_with_directories(team_directory, user_directory);

        let result = service
            .get_role_by_user_and_team(user_id, Uuid::new_v4())
            .await;
        assert!(matches!(
            result,
            Err(DomainError::ResourceNotFound {
                resource: Resource::Membership,
                id: None
            })
        ));
    }

    #[tokio::test]
    async fn test_resolve_fails_when_role_missing_from_store() {
        let user_id = Uuid::new_v4();
        let team_id = Uuid::new_v4();
        let role_id = Uuid::new_v4();

        let mut team_directory = MockTeamDirectory::new();
        team_directory
            .expect_get()
            .returning(move |id| Ok(Some(Team::new(id, "Ordinary Coral Lynx", user_id, vec![]))));

        let mut user_directory = MockUserDirectory::new();
        user_directory.expect_get().returning(|id| Ok(Some(User::new(id))));

        let mut membership_repository = MockMembershipRepository::new();
        membership_repository
            .expect_get_by_user_and_team()
            .returning(move |user_id, team_id| {
                Ok(Some(Membership::new(user_id, team_id, role_id)))
            });

        let mut role_repository = MockRoleRepository::new();
        role_repository.expect_get_by_id().returning(|_| Ok(None));

        let service = RoleCatalogService::new(
            Arc::new(role_repository),
            Arc::new(membership_repository),
            Arc::new(team_directory),
            Arc::new(user_directory),
        );

        let result = service.get_role_by_user_and_team(user_id, team_id).await;
        assert!(matches!(
            result,
            Err(DomainError::ResourceNotFound {
                resource: Resource::Role,
                id: Some(id)
            }) if id == role_id
        ));
    }
}
