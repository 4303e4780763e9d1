//! User snapshot and directory contract

mod directory;
mod entity;

pub use directory::UserDirectory;
pub use entity::User;

#[cfg(test)]
pub use directory::MockUserDirectory;
