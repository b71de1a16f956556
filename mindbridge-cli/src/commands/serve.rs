//! Mindbridge serve command
//!
//! Runs the REST API in the foreground until Ctrl+C or SIGTERM. Flags
//! override whatever the config files set.

use anyhow::Result;
use clap::Args;
use mindbridge_server::{MindbridgeServer, ServerConfig};
use tracing::info;

use crate::config::{ConfigLoader, MindbridgeConfig};

/// Arguments for the serve command
#[derive(Debug, Args, Default)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Allowed CORS origin (repeatable)
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = resolve(ConfigLoader::load()?, args);

    info!("Starting mindbridge server on {}", config.addr());
    if config.cors_origins.is_empty() {
        info!("CORS: any origin");
    } else {
        info!("CORS: {}", config.cors_origins.join(", "));
    }

    MindbridgeServer::new(config).run().await.map_err(Into::into)
}

/// Apply command-line overrides on top of the loaded config
fn resolve(file: MindbridgeConfig, args: ServeArgs) -> ServerConfig {
    let mut config: ServerConfig = file.server.into();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if !args.cors_origins.is_empty() {
        config.cors_origins = args.cors_origins;
    }
    config
}
