use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "github-languages",
    version,
    about = "Summarize a GitHub user's profile and the languages across their public repositories"
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a user's profile and the languages used across their repositories
    Run {
        /// GitHub username to look up
        username: String,
    },
    /// Verify that Vault is reachable and accepts VAULT_TOKEN
    CheckVault,
}
