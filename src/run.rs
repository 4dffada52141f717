//! Application run modes: logger init and HTTP server launch.

use std::sync::Arc;

use crate::cli::Args;
use crate::core::bedrock::BedrockSource;
use crate::core::config::Config;
use crate::core::models::CatalogCache;
use crate::core::server;

/// Initialize env_logger. `RUST_LOG` takes precedence over -v/-q.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Build the Bedrock-backed cache and serve `/models` until Ctrl-C.
pub async fn run_server(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = BedrockSource::from_config(config).await;
    log::info!("Using Bedrock region {}", config.region);
    let cache = Arc::new(CatalogCache::new(source, config.cache_ttl));
    server::serve(config.bind_addr, cache).await
}
