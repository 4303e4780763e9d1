//! Role store implementations and catalog service

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresRoleRepository;
pub use repository::InMemoryRoleRepository;
pub use service::{CreateRoleRequest, RoleCatalogService};
