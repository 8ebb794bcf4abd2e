use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::file_store::FileStore;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use crate::ssl::traits::reloadable::Reloadable;
use crate::ssl::traits::store::Store;
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("paths", &*self.paths.read())
            .field("current", &*self.current.read())
            .finish()
    }
}

impl FileStore {
    /// Builds the store from a first successful load; there is no store
    /// without a certificate.
    pub fn new(cert_path: &str, key_path: &str) -> Result<FileStore, CertificateError> {
        let certificate = Certificate::load_from_files(cert_path, key_path)?;
        info!(
            "[CERTIFICATE] Loaded {} for {:?}",
            cert_path, certificate.names
        );
        Ok(FileStore {
            paths: RwLock::new(CertificatePaths {
                cert_path: cert_path.to_string(),
                key_path: key_path.to_string(),
            }),
            current: RwLock::new(Arc::new(certificate)),
            reload_lock: Mutex::new(()),
        })
    }

    pub fn paths(&self) -> CertificatePaths {
        self.paths.read().clone()
    }

    /// Points the store at other files; they are read on the next reload.
    pub fn set_paths(&self, cert_path: &str, key_path: &str) {
        *self.paths.write() = CertificatePaths {
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        };
    }

    pub fn current(&self) -> Arc<Certificate> {
        self.current.read().clone()
    }

    /// Loads from new paths and keeps them only if the load succeeds.
    pub fn reload_with_paths(&self, cert_path: &str, key_path: &str) -> Result<(), CertificateError> {
        let _reloading = self.reload_lock.lock();
        let certificate = Certificate::load_from_files(cert_path, key_path)?;
        self.set_paths(cert_path, key_path);
        self.swap(certificate);
        Ok(())
    }

    fn swap(&self, certificate: Certificate) {
        debug!(
            "[CERTIFICATE] Swapping certificate for {:?} from {}",
            certificate.names, certificate.cert_path
        );
        *self.current.write() = Arc::new(certificate);
    }
}

impl Reloadable for FileStore {
    fn reload(&self) -> Result<(), CertificateError> {
        let _reloading = self.reload_lock.lock();
        let paths = self.paths();
        let certificate = Certificate::load_from_files(&paths.cert_path, &paths.key_path)?;
        self.swap(certificate);
        info!("[CERTIFICATE] Reloaded certificate from {}", paths.cert_path);
        Ok(())
    }
}

impl Store for FileStore {
    fn get_certificate_no_default(
        &self,
        handshake: &HandshakeInfo,
    ) -> Result<Option<Arc<Certificate>>, CertificateError> {
        let certificate = self.current();
        if certificate.supports(handshake) {
            return Ok(Some(certificate));
        }
        Ok(None)
    }

    fn get_certificate(&self, _handshake: &HandshakeInfo) -> Result<Arc<Certificate>, CertificateError> {
        Ok(self.current())
    }
}
