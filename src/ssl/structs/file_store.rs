use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Store backed by one certificate file and one key file.
pub struct FileStore {
    pub(crate) paths: RwLock<CertificatePaths>,
    pub(crate) current: RwLock<Arc<Certificate>>,
    pub(crate) reload_lock: Mutex<()>,
}
