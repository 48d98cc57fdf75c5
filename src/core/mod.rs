//! Core infrastructure for the physics API server.
//!
//! This module contains configuration, error types, and the HTTP server
//! itself. Domain logic lives in [`crate::api`] and [`crate::formulas`].

mod config;
mod error;
pub mod server;

pub use config::{Config, HttpConfig, LoggingConfig, ServerConfig};
pub use error::{Error, Result};
pub use server::HttpServer;
