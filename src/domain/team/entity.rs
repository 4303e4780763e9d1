//! Team snapshot as served by the external team directory

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team as returned by the directory. Owned and mutated only by the
/// directory; this service treats it as an immutable value fetched per
/// request and never caches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    id: Uuid,
    name: String,
    team_lead_id: Uuid,
    #[serde(default)]
    team_member_ids: Vec<Uuid>,
}

impl Team {
    pub fn new(id: Uuid, name: impl Into<String>, team_lead_id: Uuid, team_member_ids: Vec<Uuid>) -> Self {
        Self {
            id,
            name: name.into(),
            team_lead_id,
            team_member_ids,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team_lead_id(&self) -> Uuid {
        self.team_lead_id
    }

    pub fn team_member_ids(&self) -> &[Uuid] {
        &self.team_member_ids
    }

    /// The membership rule: a user belongs to the team when they are the
    /// lead or appear in the member set.
    pub fn includes_user(&self, user_id: Uuid) -> bool {
        self.team_lead_id == user_id || self.team_member_ids.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_belongs_to_team() {
        let lead = Uuid::new_v4();
        let team = Team::new(Uuid::new_v4(), "Ordinary Coral Lynx", lead, vec![]);
        assert!(team.includes_user(lead));
    }

    #[test]
    fn test_member_belongs_to_team() {
        let member = Uuid::new_v4();
        let team = Team::new(Uuid::new_v4(), "Ordinary Coral Lynx", Uuid::new_v4(), vec![member]);
        assert!(team.includes_user(member));
    }

    #[test]
    fn test_stranger_does_not_belong_to_team() {
        let team = Team::new(
            Uuid::new_v4(),
            "Ordinary Coral Lynx",
            Uuid::new_v4(),
            vec![Uuid::new_v4()],
        );
        assert!(!team.includes_user(Uuid::new_v4()));
    }

    #[test]
    fn test_team_deserializes_camel_case() {
        let json = r#"{
            "id": "7676a4bf-adfe-415c-941b-1739af07039b",
            "name": "Ordinary Coral Lynx",
            "teamLeadId": "fd282131-d8aa-4819-b0c8-d9e0bfb1b75c",
            "teamMemberIds": ["11111111-1111-1111-1111-111111111111"]
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.name(), "Ordinary Coral Lynx");
        assert_eq!(team.team_member_ids().len(), 1);
    }

    #[test]
    fn test_member_ids_default_to_empty() {
        let json = r#"{
            "id": "7676a4bf-adfe-415c-941b-1739af07039b",
            "name": "Ordinary Coral Lynx",
            "teamLeadId": "fd282131-d8aa-4819-b0c8-d9e0bfb1b75c"
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert!(team.team_member_ids().is_empty());
    }
}
