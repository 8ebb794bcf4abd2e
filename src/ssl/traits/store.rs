use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use crate::ssl::traits::reloadable::Reloadable;
use std::sync::Arc;

/// A reloadable source of server certificates.
pub trait Store: Reloadable {
    /// The certificate to present if it is compatible with the client,
    /// `Ok(None)` when it is not.
    fn get_certificate_no_default(
        &self,
        handshake: &HandshakeInfo,
    ) -> Result<Option<Arc<Certificate>>, CertificateError>;

    /// The certificate to present, compatible or not.
    fn get_certificate(
        &self,
        handshake: &HandshakeInfo,
    ) -> Result<Arc<Certificate>, CertificateError>;
}
