use crate::config::structs::certificate_config::CertificateConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::file_store::FileStore;
use crate::ssl::structs::store_resolver::StoreResolver;
use log::info;
use rcgen::{CertificateParams, KeyPair};
use std::sync::Arc;

pub fn create_server_config_with_resolver(
    resolver: Arc<StoreResolver>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    Ok(rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(resolver))
}

/// Loads one store per configured certificate, in configuration order.
pub fn load_file_stores(
    certificates: &[CertificateConfig],
) -> Result<Vec<(String, Arc<FileStore>)>, CertificateError> {
    certificates
        .iter()
        .map(|certificate| {
            let store = FileStore::new(&certificate.cert_path, &certificate.key_path)?;
            info!("[CERTIFICATE] Store '{}' ready", certificate.name);
            Ok((certificate.name.clone(), Arc::new(store)))
        })
        .collect()
}

/// Writes a self-signed development certificate covering `localhost` and
/// the extra domain.
pub fn generate_self_signed(domain: &str, cert_file: &str, key_file: &str) -> Result<(), CertificateError> {
    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }
    let params = CertificateParams::new(subject_alt_names)
        .map_err(|e| CertificateError::Generation(e.to_string()))?;
    let key_pair = KeyPair::generate().map_err(|e| CertificateError::Generation(e.to_string()))?;
    let certificate = params
        .self_signed(&key_pair)
        .map_err(|e| CertificateError::Generation(e.to_string()))?;
    std::fs::write(cert_file, certificate.pem())
        .map_err(|e| CertificateError::Generation(format!("{}: {}", cert_file, e)))?;
    std::fs::write(key_file, key_pair.serialize_pem())
        .map_err(|e| CertificateError::Generation(format!("{}: {}", key_file, e)))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(key_file, std::fs::Permissions::from_mode(0o600))
            .map_err(|e| CertificateError::Generation(format!("{}: {}", key_file, e)))?;
    }
    info!("[CERTGEN] The files {} and {} have been generated", cert_file, key_file);
    Ok(())
}
