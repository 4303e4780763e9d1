//! Role entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{DomainError, Resource};

/// A named capability that can be assigned to a membership. Immutable once
/// created; the name is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: Uuid,
    name: String,
}

impl Role {
    /// Create a new role with a generated id. The name must not be blank.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument(Resource::Role));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    /// Rebuild a role from stored parts
    pub fn from_parts(id: Uuid, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
