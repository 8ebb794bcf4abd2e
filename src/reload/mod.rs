//! Triggered reloading of stores.
//!
//! A [`structs::reload_manager::ReloadManager`] connects a trigger (an OS
//! signal or a broadcast channel) to anything implementing
//! [`crate::ssl::traits::reloadable::Reloadable`]. Each registration owns
//! one listener task that runs reloads on the blocking pool, one at a time.
//! Registering the same `Arc` twice is a no-op.
//!
//! ```rust,ignore
//! use certs_reloader::reload::enums::reload_signal::ReloadSignal;
//! use certs_reloader::reload::enums::trigger_kind::TriggerKind;
//! use certs_reloader::reload::structs::reload_manager::ReloadManager;
//!
//! let manager = ReloadManager::new();
//! manager.notify(store.clone(), TriggerKind::Signal(ReloadSignal::hangup))?;
//! // later
//! manager.stop(&store);
//! ```

/// Trigger kinds, signals and errors.
pub mod enums;

/// Implementation blocks for the manager and triggers.
pub mod impls;

/// Listener and trigger forwarding tasks.
#[allow(clippy::module_inception)]
pub mod reload;

/// Manager, registration and status structures.
pub mod structs;
