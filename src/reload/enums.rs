//! Reload trigger enumerations.

/// Errors returned when registering a reload trigger.
pub mod reload_error;

/// Operating system signals usable as reload triggers.
pub mod reload_signal;

/// Trigger kinds accepted by the reload manager.
pub mod trigger_kind;

/// Subscribed trigger sources.
pub mod trigger_source;
