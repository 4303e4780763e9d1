//! Wire types for the HTTP API

mod error;
mod membership;
mod role;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use membership::{CreateMembershipBody, MembershipDto, RoleRefDto};
pub use role::{CreateRoleBody, RoleDto};
