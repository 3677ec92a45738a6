//! Server configuration for the Ward web layer.
//!
//! This module provides configuration types for the web server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WARD_PORT` | 8080 | Server port |
//! | `WARD_HOST` | 127.0.0.1 | Host to bind |
//! | `WARD_LOG_LEVEL` | info | Log level |
//! | `WARD_DATABASE_URL` | ward.db | SQLite database path (`:memory:` for ephemeral) |
//! | `WARD_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `WARD_ENABLE_CORS` | false | Enable CORS |
//! | `WARD_CORS_ORIGINS` | * | Allowed origins |
//! | `WARD_MAX_PAGE_SIZE` | 100 | Cap on the list view page size |

use clap::Parser;

/// Server configuration for the Ward web layer.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "ward")]
#[command(about = "Ward patient-record server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "WARD_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "WARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "WARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// SQLite database path (`:memory:` for an ephemeral database).
    #[arg(long, env = "WARD_DATABASE_URL", default_value = "ward.db")]
    pub database_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "WARD_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "WARD_ENABLE_CORS", default_value = "false")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "WARD_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Cap on the list view page size.
    #[arg(long, env = "WARD_MAX_PAGE_SIZE", default_value = "100")]
    pub max_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            database_url: "ward.db".to_string(),
            request_timeout: 30,
            enable_cors: false,
            cors_origins: "*".to_string(),
            max_page_size: 100,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables
    /// without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.max_page_size == 0 {
            errors.push("Max page size cannot be 0".to_string());
        }

        if self.database_url.is_empty() {
            errors.push("Database path cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses an ephemeral port, an in-memory database, and a short timeout.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            database_url: ":memory:".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            max_page_size: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.enable_cors);
        assert_eq!(config.max_page_size, 100);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_page_size() {
        let config = ServerConfig {
            max_page_size: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("page size")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert_eq!(config.database_url, ":memory:");
        assert!(config.validate().is_ok());
    }
}
