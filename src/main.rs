//! # Bedrock Models
//!
//! Serves one deduplicated `/models` catalog built from Bedrock's foundation
//! model listing and its system-defined cross-region inference profiles,
//! cached in memory for a few minutes.

mod cli;
mod core;
mod run;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        let mut cmd = Args::command();
        cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load(&args.overrides()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match &args.command {
        Some(Commands::Config) => {
            core::cli::run_config(&config);
            Ok(())
        }
        Some(Commands::Models { query, json }) => {
            core::cli::run_models(&config, query.as_deref(), *json).await
        }
        Some(Commands::Completions { .. }) => Ok(()),
        None | Some(Commands::Serve { .. }) => run::run_server(&config).await,
    }
}
