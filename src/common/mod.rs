//! Common utilities and shared functionality.
//!
//! - Logging setup (`fern` with colored levels)
//! - API token comparison
//! - `CustomError` for setup failures in the binary

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
