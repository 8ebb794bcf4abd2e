//! Store capabilities.

/// Reload capability.
pub mod reloadable;

/// Certificate selection capability.
pub mod store;
