//! CLI module for the User Directory service

pub mod serve;

use clap::{Parser, Subcommand};

/// User Directory - Caching and search layer over a paginated user-directory API
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
