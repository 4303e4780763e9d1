//! Team Roles API
//!
//! A service that manages team roles and role assignments:
//! - Role catalog (create and look up roles)
//! - Memberships binding a (user, team) pair to a role
//! - Validation against external team and user directories
//! - In-memory or PostgreSQL persistence

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::{AppState, MembershipServiceTrait, RoleServiceTrait};
use config::StorageBackend;
use infrastructure::membership::{
    InMemoryMembershipRepository, MembershipService, PostgresMembershipRepository,
};
use infrastructure::role::{InMemoryRoleRepository, PostgresRoleRepository, RoleCatalogService};
use infrastructure::team::HttpTeamDirectory;
use infrastructure::user::HttpUserDirectory;
use infrastructure::storage;

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state from the given configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let team_directory = Arc::new(HttpTeamDirectory::new(
        &config.directory.teams_base_url,
        config.directory.timeout(),
    )?);
    let user_directory = Arc::new(HttpUserDirectory::new(
        &config.directory.users_base_url,
        config.directory.timeout(),
    )?);

    info!(
        teams = %config.directory.teams_base_url,
        users = %config.directory.users_base_url,
        "Directory clients initialized"
    );

    let (role_service, membership_service): (
        Arc<dyn RoleServiceTrait>,
        Arc<dyn MembershipServiceTrait>,
    ) = match config.storage.backend {
        StorageBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pool = storage::connect(&database_url).await?;
            storage::ensure_schema(&pool).await?;
            info!("PostgreSQL connection established");

            let role_repository = Arc::new(PostgresRoleRepository::new(pool.clone()));
            let membership_repository = Arc::new(PostgresMembershipRepository::new(pool));
            (
                Arc::new(RoleCatalogService::new(
                    role_repository.clone(),
                    membership_repository.clone(),
                    team_directory.clone(),
                    user_directory.clone(),
                )),
                Arc::new(MembershipService::new(
                    membership_repository,
                    role_repository,
                    team_directory.clone(),
                    user_directory.clone(),
                )),
            )
        }
        StorageBackend::InMemory => {
            info!("Using in-memory storage for roles and memberships");
            let role_repository = Arc::new(InMemoryRoleRepository::new());
            let membership_repository = Arc::new(InMemoryMembershipRepository::new());
            (
                Arc::new(RoleCatalogService::new(
                    role_repository.clone(),
                    membership_repository.clone(),
                    team_directory.clone(),
                    user_directory.clone(),
                )),
                Arc::new(MembershipService::new(
                    membership_repository,
                    role_repository,
                    team_directory.clone(),
                    user_directory.clone(),
                )),
            )
        }
    };

    Ok(AppState {
        role_service,
        membership_service,
        team_directory,
        user_directory,
    })
}
