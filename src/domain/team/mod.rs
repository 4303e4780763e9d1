//! Team snapshot and directory contract

mod directory;
mod entity;

pub use directory::TeamDirectory;
pub use entity::Team;

#[cfg(test)]
pub use directory::MockTeamDirectory;
