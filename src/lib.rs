//! # certs-reloader
//!
//! Hot-reloadable TLS certificate stores for rustls servers.
//!
//! ## Overview
//!
//! A store decides, for every TLS handshake, which certificate the server
//! presents. Certificates can be replaced while the server keeps running:
//! handshakes in flight keep the certificate they picked, and a failed
//! reload leaves the last good certificate in place.
//!
//! ## Features
//!
//! - **File stores**: one PEM certificate chain and private key per store
//! - **Multi stores**: ordered aggregation, first compatible certificate wins
//! - **Triggered reload**: SIGHUP/SIGUSR1/SIGUSR2 or a broadcast channel,
//!   registered at most once per store
//! - **HTTPS server**: actix-web with certificate administration endpoints
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use certs_reloader::reload::enums::reload_signal::ReloadSignal;
//! use certs_reloader::reload::enums::trigger_kind::TriggerKind;
//! use certs_reloader::reload::structs::reload_manager::ReloadManager;
//! use certs_reloader::ssl::structs::file_store::FileStore;
//!
//! let store = Arc::new(FileStore::new("cert.pem", "key.pem")?);
//! let manager = ReloadManager::new();
//! manager.notify(store.clone(), TriggerKind::Signal(ReloadSignal::hangup))?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTPS service and certificate endpoints
//! - [`common`] - logging setup and shared helpers
//! - [`config`] - configuration management and TOML parsing
//! - [`reload`] - reload triggers and their listeners
//! - [`ssl`] - certificates, stores and the rustls resolver
//! - [`structs`] - CLI argument parsing

/// HTTPS service module.
///
/// Serves `/ping` and the certificate reload/status endpoints behind the
/// configured API key.
pub mod api;

/// Common utilities and shared functionality.
///
/// Logging setup, API token comparison and the `CustomError` type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration.
pub mod config;

/// Reload trigger module.
///
/// Connects OS signals or broadcast channels to reloadable stores, one
/// listener task per registration.
pub mod reload;

/// SSL/TLS certificate management module.
///
/// Provides certificate stores with hot-reload support and the rustls
/// certificate resolver built on them.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
