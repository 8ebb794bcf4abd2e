//! Reload trigger structures.

/// Registry owning every active reload trigger.
pub mod reload_manager;

/// Reload outcome counters.
pub mod reload_status;

/// A single registered trigger with its tasks.
pub mod registration;
