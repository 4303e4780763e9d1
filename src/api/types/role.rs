//! Role DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Role;
use crate::infrastructure::role::CreateRoleRequest;

/// Role as returned on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDto {
    pub id: Uuid,
    pub name: String,
}

impl RoleDto {
    pub fn from_domain(role: &Role) -> Self {
        Self {
            id: role.id(),
            name: role.name().to_string(),
        }
    }
}

/// Create-role request body. The name is optional so a missing field
/// reaches the service as a domain error instead of a 422 from serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRoleBody {
    pub name: Option<String>,
}

impl CreateRoleBody {
    pub fn into_request(self) -> CreateRoleRequest {
        CreateRoleRequest { name: self.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_dto_from_domain() {
        let role = Role::new("DevOps").unwrap();
        let dto = RoleDto::from_domain(&role);

        assert_eq!(dto.id, role.id());
        assert_eq!(dto.name, "DevOps");
    }

    #[test]
    fn test_create_role_body_tolerates_missing_name() {
        let body: CreateRoleBody = serde_json::from_str("{}").unwrap();
        assert!(body.name.is_none());
    }
}
