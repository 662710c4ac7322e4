//! Domains module containing business logic organized by bounded contexts.
//!
//! The server has a single domain: the tools it exposes over MCP.

pub mod tools;
