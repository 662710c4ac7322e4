//! Bad Time MCP Server Entry Point
//!
//! Parses the command line, initializes logging, and starts the server with
//! the selected transport. Running the transport is the terminal action of
//! the process.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use bad_time_mcp_server::{Config, LogLevel, McpServer, ServerArgs, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    let config = Config::from_args(&args);

    init_logging(config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone());

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Diagnostics go to stderr so they never mix with the stdio protocol
/// stream.
fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::from_default_env().add_directive(level.as_tracing_level().into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
