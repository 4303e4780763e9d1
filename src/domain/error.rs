use thiserror::Error;
use uuid::Uuid;

/// Resource kinds referenced by domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Role,
    Membership,
    Team,
    User,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Role => write!(f, "Role"),
            Self::Membership => write!(f, "Membership"),
            Self::Team => write!(f, "Team"),
            Self::User => write!(f, "User"),
        }
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A referenced entity does not exist. The id is omitted when the
    /// resource is not addressable by a single id (a membership looked up
    /// by its (user, team) pair).
    #[error("{resource}{} not found", .id.map(|id| format!(" {id}")).unwrap_or_default())]
    ResourceNotFound {
        resource: Resource,
        id: Option<Uuid>,
    },

    /// A uniqueness constraint was violated
    #[error("{resource} already exists")]
    ResourceExists { resource: Resource },

    /// A required reference field is missing on an otherwise-present input
    #[error("Invalid '{resource}' object")]
    InvalidArgument { resource: Resource },

    /// The user is neither the lead nor a member of the referenced team
    #[error("Invalid 'Membership' object. The provided user doesn't belong to the provided team.")]
    InvalidMembership,

    /// A directory lookup failed at the transport level. Distinct from
    /// ResourceNotFound: the entity may well exist.
    #[error("{directory} directory unavailable: {message}")]
    DirectoryUnavailable {
        directory: Resource,
        message: String,
    },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(resource: Resource, id: Uuid) -> Self {
        Self::ResourceNotFound {
            resource,
            id: Some(id),
        }
    }

    pub fn not_found_anonymous(resource: Resource) -> Self {
        Self::ResourceNotFound { resource, id: None }
    }

    pub fn exists(resource: Resource) -> Self {
        Self::ResourceExists { resource }
    }

    pub fn invalid_argument(resource: Resource) -> Self {
        Self::InvalidArgument { resource }
    }

    pub fn directory_unavailable(directory: Resource, message: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            directory,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
