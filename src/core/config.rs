//! Configuration management for the MCP server.
//!
//! Configuration is built once from command-line arguments at startup and is
//! immutable for the process lifetime. No environment variables are consumed.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::Level;

use super::transport::{HttpConfig, TransportConfig};

// ============================================================================
// Command-line arguments
// ============================================================================

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Bad Time MCP Server", long_about = None)]
pub struct ServerArgs {
    /// Run as HTTP server instead of stdio.
    #[arg(long)]
    pub http: bool,

    /// Host to bind to in HTTP mode.
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port to bind to in HTTP mode.
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Set logging level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

/// Log verbosity levels accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The corresponding tracing level filter.
    pub fn as_tracing_level(self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum severity of emitted diagnostic logs.
    pub level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Bad Time MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: LogLevel::Info,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Build the configuration from parsed command-line arguments.
    pub fn from_args(args: &ServerArgs) -> Self {
        let transport = if args.http {
            TransportConfig::http(args.port, args.host.clone())
        } else {
            TransportConfig::stdio()
        };

        Self {
            logging: LoggingConfig {
                level: args.log_level,
            },
            transport,
            ..Self::default()
        }
    }

    /// The HTTP configuration, when the HTTP transport is selected.
    pub fn http(&self) -> Option<&HttpConfig> {
        match &self.transport {
            TransportConfig::Http(cfg) => Some(cfg),
            TransportConfig::Stdio => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_defaults() {
        let args = ServerArgs::try_parse_from(["bad-time-mcp"]).unwrap();
        assert!(!args.http);
        assert_eq!(args.host, "localhost");
        assert_eq!(args.port, 8000);
        assert_eq!(args.log_level, LogLevel::Info);

        let config = Config::from_args(&args);
        assert!(config.transport.is_stdio());
        assert!(config.http().is_none());
    }

    #[test]
    fn test_args_http_mode() {
        let args = ServerArgs::try_parse_from([
            "bad-time-mcp",
            "--http",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
        ])
        .unwrap();

        let config = Config::from_args(&args);
        let http = config.http().expect("http transport expected");
        assert_eq!(http.host, "0.0.0.0");
        assert_eq!(http.port, 9000);
    }

    #[test]
    fn test_args_log_level_uppercase_names() {
        for (flag, level) in [
            ("DEBUG", LogLevel::Debug),
            ("INFO", LogLevel::Info),
            ("WARNING", LogLevel::Warning),
            ("ERROR", LogLevel::Error),
        ] {
            let args =
                ServerArgs::try_parse_from(["bad-time-mcp", "--log-level", flag]).unwrap();
            assert_eq!(args.log_level, level);
        }
    }

    #[test]
    fn test_args_rejects_bogus_log_level() {
        let err = ServerArgs::try_parse_from(["bad-time-mcp", "--log-level", "BOGUS"])
            .expect_err("unrecognized log level must be a usage error");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Warning.as_tracing_level(), Level::WARN);
        assert_eq!(LogLevel::Debug.as_tracing_level(), Level::DEBUG);
    }
}
