//! Infrastructure layer: stores, directory clients, services, logging

pub mod logging;
pub mod membership;
pub mod role;
pub mod storage;
pub mod team;
pub mod user;
