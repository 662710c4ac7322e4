//! Stdio transport implementation.
//!
//! Standard input/output transport for MCP - the default mode.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Stdio transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the stdio transport.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("Stdio transport finished");
        Ok(())
    }
}
