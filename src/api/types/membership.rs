//! Membership DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Membership, NewMembership};

use super::ApiError;

/// Role reference carried inside a membership payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRefDto {
    pub id: Option<Uuid>,
}

/// Membership as returned on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role: RoleRefDto,
}

impl MembershipDto {
    pub fn from_domain(membership: &Membership) -> Self {
        Self {
            id: membership.id(),
            user_id: membership.user_id(),
            team_id: membership.team_id(),
            role: RoleRefDto {
                id: Some(membership.role_id()),
            },
        }
    }
}

/// Create-membership request body. userId and teamId are required at the
/// boundary; the role reference stays optional so its absence is raised by
/// the validation pipeline as `InvalidArgument`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipBody {
    pub user_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub role: Option<RoleRefDto>,
}

impl CreateMembershipBody {
    pub fn into_new_membership(self) -> Result<NewMembership, ApiError> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApiError::bad_request("userId is required"))?;
        let team_id = self
            .team_id
            .ok_or_else(|| ApiError::bad_request("teamId is required"))?;
        let role_id = self.role.and_then(|role| role.id);

        Ok(NewMembership::new(user_id, team_id, role_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_dto_round_trip() {
        let membership = Membership::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let dto = MembershipDto::from_domain(&membership);

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("userId"));
        assert!(json.contains("teamId"));

        let back: MembershipDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dto);
    }

    #[test]
    fn test_body_without_user_id_is_rejected() {
        let body = CreateMembershipBody {
            user_id: None,
            team_id: Some(Uuid::new_v4()),
            role: Some(RoleRefDto {
                id: Some(Uuid::new_v4()),
            }),
        };

        let err = body.into_new_membership().unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_body_without_role_keeps_none_for_pipeline() {
        let body = CreateMembershipBody {
            user_id: Some(Uuid::new_v4()),
            team_id: Some(Uuid::new_v4()),
            role: None,
        };

        let membership = body.into_new_membership().unwrap();
        assert!(membership.role_id.is_none());
    }

    #[test]
    fn test_role_ref_without_id_keeps_none_for_pipeline() {
        let body: CreateMembershipBody = serde_json::from_str(
            r#"{"userId":"fd282131-d8aa-4819-b0c8-d9e0bfb1b75c",
                "teamId":"7676a4bf-adfe-415c-941b-1739af07039b",
                "role":{}}"#,
        )
        .unwrap();

        let membership = body.into_new_membership().unwrap();
        assert!(membership.role_id.is_none());
    }
}
