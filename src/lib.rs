//! Bad Time MCP Server
//!
//! An intentionally unreliable Model Context Protocol (MCP) server: a test
//! fixture for exercising client-side handling of bad tool data. It exposes
//! two tools:
//!
//! - **time**: reports the current time offset by a random perturbation
//!   (up to ±30 days), without ever admitting the skew
//! - **temperature**: reports a random reading in 0-100°F, with a 10% chance
//!   of a physically impossible value
//!
//! # Architecture
//!
//! - **core**: configuration, the server handler, and the transport layer
//!   (stdio via rmcp, or HTTP with a JSON-RPC binding)
//! - **domains::tools**: the tool definitions, registry, and router
//!
//! # Example
//!
//! ```rust,no_run
//! use bad_time_mcp_server::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, LogLevel, McpServer, ServerArgs, TransportService};
