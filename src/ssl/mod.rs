//! TLS certificate stores with hot-reload support.
//!
//! A store answers one question per handshake: which certificate should be
//! presented to this client. Stores can be reloaded at any time without
//! disturbing handshakes in flight; a failed reload keeps the previous
//! certificate.
//!
//! # Stores
//!
//! - [`structs::file_store::FileStore`] - one certificate/key file pair
//! - [`structs::multi_store::MultiStore`] - ordered list of stores, first match wins
//!
//! Both implement [`traits::store::Store`], which extends
//! [`traits::reloadable::Reloadable`].
//!
//! # Server integration
//!
//! [`structs::store_resolver::StoreResolver`] implements
//! `rustls::server::ResolvesServerCert` on top of any store.
//!
//! # Example
//!
//! ```rust,ignore
//! use certs_reloader::ssl::structs::file_store::FileStore;
//! use certs_reloader::ssl::structs::store_resolver::StoreResolver;
//! use certs_reloader::ssl::ssl::create_server_config_with_resolver;
//!
//! let store = Arc::new(FileStore::new("cert.pem", "key.pem")?);
//! let config = create_server_config_with_resolver(Arc::new(StoreResolver::new(store)))?;
//! ```

/// Certificate error enumeration.
pub mod enums;

/// Implementation blocks for certificates, stores and the resolver.
pub mod impls;

/// Server config construction and store loading helpers.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Certificate, store and resolver structures.
pub mod structs;

/// Reloadable and store capabilities.
pub mod traits;

#[cfg(test)]
mod tests;
