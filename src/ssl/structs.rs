//! Certificate store structures.

/// A loaded certificate chain with its key and metadata.
pub mod certificate;

/// Certificate and key file locations.
pub mod certificate_paths;

/// Store backed by a single certificate/key file pair.
pub mod file_store;

/// Client hello capabilities used for certificate selection.
pub mod handshake_info;

/// Ordered aggregation of stores.
pub mod multi_store;

/// rustls certificate resolver backed by a store.
pub mod store_resolver;
