//! Transport layer for the MCP server.
//!
//! This module provides the two transport implementations:
//! - **stdio**: Standard input/output (default for MCP)
//! - **HTTP**: HTTP server with JSON-RPC over POST requests
//!
//! The mode is selected at startup from the command line; each transport
//! handles the connection lifecycle and delegates message processing to the
//! MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
