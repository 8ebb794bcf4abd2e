pub mod certificate;
pub mod file_store;
pub mod handshake_info;
pub mod multi_store;
pub mod store_resolver;
