//! Data structures for the REST API module.

/// Request and response bodies of the certificate endpoints.
pub mod api_certificate;

/// Shared data context for request handlers.
pub mod api_service_data;

/// Query parameter for API token authentication.
pub mod query_token;
