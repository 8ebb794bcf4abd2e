use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use crate::ssl::structs::store_resolver::StoreResolver;
use crate::ssl::traits::store::Store;
use log::{debug, warn};
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for StoreResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreResolver")
            .field("fallback_to_default", &self.fallback_to_default)
            .finish()
    }
}

impl StoreResolver {
    /// Resolver that always answers with a certificate, falling back to the
    /// store's default when nothing is compatible.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            fallback_to_default: true,
        }
    }

    /// Resolver that fails the handshake when no certificate is compatible.
    pub fn strict(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            fallback_to_default: false,
        }
    }

    pub fn fallback_to_default(&self) -> bool {
        self.fallback_to_default
    }

    pub fn select(&self, handshake: &HandshakeInfo) -> Result<Option<Arc<Certificate>>, CertificateError> {
        if self.fallback_to_default {
            return self.store.get_certificate(handshake).map(Some);
        }
        self.store.get_certificate_no_default(handshake)
    }
}

impl ResolvesServerCert for StoreResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        let handshake = HandshakeInfo::from_client_hello(&client_hello);
        match self.select(&handshake) {
            Ok(Some(certificate)) => Some(certificate.certified_key.clone()),
            Ok(None) => {
                debug!("[CERTIFICATE] No compatible certificate for {}", handshake);
                None
            }
            Err(error) => {
                warn!("[CERTIFICATE] Rejecting handshake ({}): {}", handshake, error);
                None
            }
        }
    }
}
