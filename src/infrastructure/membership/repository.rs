//! In-memory membership repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::{Membership, MembershipRepository};
use crate::domain::{DomainError, Resource};

/// In-memory implementation backed by a RwLock'd map. The (user, team)
/// uniqueness check and the insert happen under one write-lock
/// acquisition, making the insert atomic for concurrent callers.
#[derive(Debug, Default)]
pub struct InMemoryMembershipRepository {
    memberships: RwLock<HashMap<Uuid, Membership>>,
}

impl InMemoryMembershipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn insert(&self, membership: Membership) -> Result<Membership, DomainError> {
        let mut memberships = self
            .memberships
            .write()
            .map_err(|_| DomainError::storage("membership store lock poisoned"))?;

        let duplicate = memberships.values().any(|m| {
            m.user_id() == membership.user_id() && m.team_id() == membership.team_id()
        });

        if duplicate {
            return Err(DomainError::exists(Resource::Membership));
        }

        memberships.insert(membership.id(), membership.clone());
        Ok(membership)
    }

    async fn get_by_user_and_team(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<Membership>, DomainError> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| DomainError::storage("membership store lock poisoned"))?;

        Ok(memberships
            .values()
            .find(|m| m.user_id() == user_id && m.team_id() == team_id)
            .cloned())
    }

    async fn get_by_role(&self, role_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| DomainError::storage("membership store lock poisoned"))?;

        Ok(memberships
            .values()
            .filter(|m| m.role_id() == role_id)
            .cloned()
            .collect())
    }
}
