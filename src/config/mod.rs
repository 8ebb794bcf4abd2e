//! Configuration management module.
//!
//! Loads, saves and validates the server configuration stored as TOML.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **api_key**: token required by the `/api` endpoints
//! - **server**: HTTPS listener settings
//! - **reload**: signal that reloads every certificate
//! - **certificates**: certificate/key file pairs, in priority order
//!
//! # Example
//!
//! ```rust,ignore
//! use certs_reloader::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
