//! Physics API Server Library
//!
//! This crate provides a stateless HTTP service exposing classical physics
//! formulas as POST endpoints: parse a JSON body, validate the numeric
//! fields, evaluate a closed-form expression, and return a JSON envelope.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the HTTP server
//! - **api**: Request validation, the response envelope, and one handler module per physics domain
//! - **formulas**: Pure formula functions and physical constants, independent of HTTP
//!
//! # Example
//!
//! ```rust,no_run
//! use physics_api_server::core::{Config, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = HttpServer::new(config.http);
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod formulas;

// Re-export commonly used types for convenience
pub use core::{Config, Error, HttpServer, Result};
