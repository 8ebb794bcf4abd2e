//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// One `[[certificates]]` entry: a certificate/key file pair.
pub mod certificate_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// `[reload]` section: signal-triggered reloading.
pub mod reload_config;

/// `[server]` section: HTTPS listener settings.
pub mod server_config;
