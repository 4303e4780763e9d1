//! In-memory role repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::role::{Role, RoleRepository};
use crate::domain::{DomainError, Resource};

/// In-memory implementation backed by a RwLock'd map. The name-uniqueness
/// check and the insert happen under a single write-lock acquisition, so
/// the insert is atomic with respect to concurrent callers.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<HashMap<Uuid, Role>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn insert(&self, role: Role) -> Result<Role, DomainError> {
        let mut roles = self
            .roles
            .write()
            .map_err(|_| DomainError::storage("role store lock poisoned"))?;

        if roles.values().any(|r| r.name() == role.name()) {
            return Err(DomainError::exists(Resource::Role));
        }

        roles.insert(role.id(), role.clone());
        Ok(role)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Role>, DomainError> {
        let roles = self
            .roles
            .read()
            .map_err(|_| DomainError::storage("role store lock poisoned"))?;
        Ok(roles.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, DomainError> {
        let roles = self
            .roles
            .read()
            .map_err(|_| DomainError::storage("role store lock poisoned"))?;
        Ok(roles.values().find(|r| r.name() == name).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Role>, DomainError> {
        let roles = self
            .roles
            .read()
            .map_err(|_| DomainError::storage("role store lock poisoned"))?;
        Ok(roles.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = InMemoryRoleRepository::new();
        let role = Role::new("Developer").unwrap();

        let stored = repo.insert(role.clone()).await.unwrap();
        assert_eq!(stored, role);

        let fetched = repo.get_by_id(role.id()).await.unwrap();
        assert_eq!(fetched, Some(role));
    }

    #[tokio::test]
    async fn test_insert_duplicate_name_fails() {
        let repo = InMemoryRoleRepository::new();
        repo.insert(Role::new("Developer").unwrap()).await.unwrap();

        let result = repo.insert(Role::new("Developer").unwrap()).await;
        assert!(matches!(
            result,
            Err(DomainError::ResourceExists {
                resource: Resource::Role
            })
        ));
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let repo = InMemoryRoleRepository::new();
        let role = Role::new("Product Owner").unwrap();
        repo.insert(role.clone()).await.unwrap();

        let fetched = repo.get_by_name("Product Owner").await.unwrap();
        assert_eq!(fetched, Some(role));
        assert!(repo.get_by_name("Tester").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all() {
        let repo = InMemoryRoleRepository::new();
        repo.insert(Role::new("Developer").unwrap()).await.unwrap();
        repo.insert(Role::new("Tester").unwrap()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
