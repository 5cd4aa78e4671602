//
//  gitlab-cli
//  main.rs
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gitlab_cli::cli::{Cli, Commands};
use gitlab_cli::{exit_codes, Error};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GITLAB_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Users(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Info(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("gl version {}", gitlab_cli::VERSION);
            Ok(())
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::MissingCredentials | Error::Unauthorized(_) | Error::Forbidden(_)) => {
            exit_codes::AUTH_ERROR
        }
        Some(Error::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(Error::TooManyRequests(_)) => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}
