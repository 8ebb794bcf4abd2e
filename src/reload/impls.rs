//! Implementation blocks for the reload manager and its triggers.

pub mod registration;

pub mod reload_manager;

pub mod reload_signal;

pub mod reload_status;

pub mod trigger_kind;

pub mod trigger_source;
