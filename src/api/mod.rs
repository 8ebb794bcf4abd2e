//! HTTPS service and certificate administration endpoints.
//!
//! # Endpoints
//!
//! - `GET /ping` - liveness check, answers `pong!`
//! - `POST /api/certificate/reload` - reload certificates now, optionally one by name
//! - `GET /api/certificate/status` - loaded certificates and the reload trigger state
//! - `POST /api/certificate/trigger` - queue a reload through the trigger listener
//! - `DELETE /api/certificate/trigger` - stop signal-triggered reloading
//!
//! # Authentication
//!
//! The `/api` endpoints require the configured API key as a query parameter:
//! `?token=<api_key>`

/// Data structures for API service context.
pub mod structs;

/// Server construction, routes and shared handlers.
#[allow(clippy::module_inception)]
pub mod api;

/// Certificate management endpoints.
pub mod api_certificate;
