use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use crate::ssl::structs::multi_store::MultiStore;
use crate::ssl::traits::reloadable::Reloadable;
use crate::ssl::traits::store::Store;
use log::warn;
use std::sync::Arc;

impl std::fmt::Debug for MultiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiStore")
            .field("stores_count", &self.stores.len())
            .finish()
    }
}

impl MultiStore {
    pub fn new(stores: Vec<Arc<dyn Store>>) -> Self {
        Self { stores }
    }

    pub fn stores(&self) -> &[Arc<dyn Store>] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl Reloadable for MultiStore {
    /// Reloads every member, in order, even after a failure. Members that
    /// did reload keep their new certificate when others fail.
    fn reload(&self) -> Result<(), CertificateError> {
        let mut errors = Vec::new();
        for (index, store) in self.stores.iter().enumerate() {
            if let Err(error) = store.reload() {
                warn!("[CERTIFICATE] Store #{} failed to reload: {}", index, error);
                errors.push(error);
            }
        }
        if errors.is_empty() {
            return Ok(());
        }
        Err(CertificateError::Aggregate(errors))
    }
}

impl Store for MultiStore {
    fn get_certificate_no_default(
        &self,
        handshake: &HandshakeInfo,
    ) -> Result<Option<Arc<Certificate>>, CertificateError> {
        for store in &self.stores {
            if let Some(certificate) = store.get_certificate_no_default(handshake)? {
                return Ok(Some(certificate));
            }
        }
        Ok(None)
    }

    /// Falls back to the first store even when its certificate does not fit
    /// the client; `StoreResolver::strict` skips this method.
    fn get_certificate(&self, handshake: &HandshakeInfo) -> Result<Arc<Certificate>, CertificateError> {
        if let Some(certificate) = self.get_certificate_no_default(handshake)? {
            return Ok(certificate);
        }
        match self.stores.first() {
            Some(default_store) => default_store.get_certificate(handshake),
            None => Err(CertificateError::NoStores),
        }
    }
}
