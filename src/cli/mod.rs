//! CLI for the team roles API
//!
//! Single subcommand for now: `serve` runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Team Roles API - roles and team memberships service
#[derive(Parser)]
#[command(name = "team-roles-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,
}
