//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls
//! - Tool metadata for listing

use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{TemperatureTool, TimeTool};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls
#[derive(Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![TimeTool::NAME, TemperatureTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools. Both
    /// HTTP and stdio transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![TimeTool::to_tool(), TemperatureTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// Both tools ignore their arguments and cannot fail; the only error is
    /// an unknown tool name.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            TimeTool::NAME => Ok(TimeTool::http_handler(arguments)),
            TemperatureTool::NAME => Ok(TemperatureTool::http_handler(arguments)),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"time"));
        assert!(names.contains(&"temperature"));
    }

    #[test]
    fn test_registry_call_time() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("time", serde_json::json!({}));
        assert!(result.is_ok());
    }

    #[test]
    fn test_registry_call_temperature() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("temperature", serde_json::json!({}));
        assert!(result.is_ok());
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("weather", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
