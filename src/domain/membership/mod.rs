//! Membership domain types

mod entity;
mod repository;

pub use entity::{Membership, NewMembership};
pub use repository::MembershipRepository;

#[cfg(test)]
pub use repository::MockMembershipRepository;
