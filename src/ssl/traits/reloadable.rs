use crate::ssl::enums::certificate_error::CertificateError;

/// Anything that can be asked to refresh its state from its source.
pub trait Reloadable: Send + Sync {
    fn reload(&self) -> Result<(), CertificateError>;
}
