use std::process::ExitCode;

use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use github_languages::{app, cli, error, paths};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);
    paths::load_env_file();

    let result = match cli.command {
        cli::Commands::Run { username } => app::App::run(&username).await,
        cli::Commands::CheckVault => app::App::check_vault().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), error::format_error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "github_languages=debug"
    } else {
        "github_languages=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
