//! Configuration management for the physics API server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Enable CORS for browser clients.
    pub enable_cors: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "physics-api-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            http: HttpConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `PHYSICS_`.
    /// For example: `PHYSICS_HOST`, `PHYSICS_PORT`, `PHYSICS_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PHYSICS_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("PHYSICS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(host) = std::env::var("PHYSICS_HOST") {
            config.http.host = host;
        }

        if let Ok(port) = std::env::var("PHYSICS_PORT") {
            match port.parse() {
                Ok(port) => config.http.port = port,
                Err(_) => tracing::warn!(
                    "Ignoring invalid PHYSICS_PORT value {:?}, using {}",
                    port,
                    config.http.port
                ),
            }
        }

        if let Ok(enable_cors) = std::env::var("PHYSICS_ENABLE_CORS") {
            config.http.enable_cors = enable_cors.parse().unwrap_or(true);
        }

        config
    }
}
