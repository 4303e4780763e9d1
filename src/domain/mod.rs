//! Domain layer: entities, store/directory contracts and the error taxonomy

pub mod error;
pub mod membership;
pub mod role;
pub mod team;
pub mod user;

pub use error::{DomainError, Resource};
pub use membership::{Membership, MembershipRepository, NewMembership};
pub use role::{Role, RoleRepository};
pub use team::{Team, TeamDirectory};
pub use user::{User, UserDirectory};
