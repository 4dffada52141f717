//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::config::Overrides;

const AFTER_HELP: &str = "\
EXAMPLES:
  bedrock-models                         Serve GET /models on 127.0.0.1:8000
  bedrock-models serve --bind 0.0.0.0:80 Serve on another address
  bedrock-models models --query claude   List matching models once
  bedrock-models models --json           Print the raw /models payload
  bedrock-models config                  Show resolved region, address, and TTL
  bedrock-models completions bash        Generate bash completions

ENVIRONMENT:
  AWS_REGION / AWS_DEFAULT_REGION   Bedrock region (default us-east-1)
  MODELS_BIND_ADDR                  Listen address (default 127.0.0.1:8000)
  MODELS_CACHE_TTL_SECONDS          Catalog cache TTL (default 300)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Unified, cached catalog of Bedrock foundation models and cross-region profiles",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the Bedrock region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the model catalog over HTTP (default)
    Serve {
        /// Address to listen on (e.g. 127.0.0.1:8000)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Fetch and list available models once
    Models {
        /// Filter models by id
        #[arg(long)]
        query: Option<String>,
        /// Print the catalog as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show resolved configuration
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags. The server logs at info unless told otherwise.
    pub fn log_level(&self) -> &'static str {
        let serving = matches!(self.command, None | Some(Commands::Serve { .. }));
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 || serving {
            "info"
        } else {
            "warn"
        }
    }

    /// Config overrides from flags.
    pub fn overrides(&self) -> Overrides {
        let bind = match &self.command {
            Some(Commands::Serve { bind }) => bind.clone(),
            _ => None,
        };
        Overrides {
            region: self.region.clone(),
            bind,
        }
    }
}
