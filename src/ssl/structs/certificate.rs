use chrono::{DateTime, Utc};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A loaded certificate chain with its signing key.
///
/// Immutable once built; stores hand it out behind an `Arc` so a handshake
/// keeps whatever certificate it picked even while a reload swaps it out.
pub struct Certificate {
    pub certified_key: Arc<CertifiedKey>,
    pub names: Vec<String>,
    pub not_after: Option<DateTime<Utc>>,
    pub loaded_at: DateTime<Utc>,
    pub cert_path: String,
    pub key_path: String,
}
