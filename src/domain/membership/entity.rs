//! Membership entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An unvalidated membership request as received from a caller. The role
/// reference is optional here: its absence is a domain error raised by the
/// validation pipeline, not a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMembership {
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role_id: Option<Uuid>,
}

impl NewMembership {
    pub fn new(user_id: Uuid, team_id: Uuid, role_id: Option<Uuid>) -> Self {
        Self {
            user_id,
            team_id,
            role_id,
        }
    }
}

/// The persisted association of one user to one team with one assigned role.
/// The (user_id, team_id) pair is unique across the store. Immutable once
/// created; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    id: Uuid,
    user_id: Uuid,
    team_id: Uuid,
    role_id: Uuid,
}

impl Membership {
    /// Create a validated membership with a generated id
    pub fn new(user_id: Uuid, team_id: Uuid, role_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            team_id,
            role_id,
        }
    }

    /// Rebuild a membership from stored parts
    pub fn from_parts(id: Uuid, user_id: Uuid, team_id: Uuid, role_id: Uuid) -> Self {
        Self {
            id,
            user_id,
            team_id,
            role_id,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    pub fn role_id(&self) -> Uuid {
        self.role_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_creation_generates_id() {
        let user_id = Uuid::new_v4();
        let team_id = Uuid::new_v4();
        let role_id = Uuid::new_v4();

        let membership = Membership::new(user_id, team_id, role_id);

        assert!(!membership.id().is_nil());
        assert_eq!(membership.user_id(), user_id);
        assert_eq!(membership.team_id(), team_id);
        assert_eq!(membership.role_id(), role_id);
    }

    #[test]
    fn test_distinct_memberships_get_distinct_ids() {
        let user_id = Uuid::new_v4();
        let team_id = Uuid::new_v4();
        let role_id = Uuid::new_v4();

        let a = Membership::new(user_id, team_id, role_id);
        let b = Membership::new(user_id, team_id, role_id);
        assert_ne!(a.id(), b.id());
    }
}
