//! User snapshot as served by the external user directory

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as returned by the directory. Only existence matters to the
/// validation pipeline; the remaining attributes are passed through on the
/// lookup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            display_name: None,
            avatar_url: None,
            location: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}
