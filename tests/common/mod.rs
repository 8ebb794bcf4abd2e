#![allow(dead_code)]
use certs_reloader::config::structs::certificate_config::CertificateConfig;
use certs_reloader::config::structs::configuration::Configuration;
use rcgen::{CertificateParams, KeyPair, PKCS_ED25519};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub type TestConfig = Arc<Configuration>;

/// A generated certificate/key pair on disk.
pub struct TestCertificate {
    pub cert_path: String,
    pub key_path: String,
    pub der: Vec<u8>,
}

pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `<name>.pem` and `<name>.key` into `dir`, overwriting earlier files.
pub fn write_certificate(dir: &Path, name: &str, dns_names: &[&str]) -> TestCertificate {
    write_certificate_with_key(dir, name, dns_names, KeyPair::generate().expect("Failed to generate key"))
}

pub fn write_ed25519_certificate(dir: &Path, name: &str, dns_names: &[&str]) -> TestCertificate {
    write_certificate_with_key(
        dir,
        name,
        dns_names,
        KeyPair::generate_for(&PKCS_ED25519).expect("Failed to generate key"),
    )
}

fn write_certificate_with_key(dir: &Path, name: &str, dns_names: &[&str], key_pair: KeyPair) -> TestCertificate {
    let params = CertificateParams::new(dns_names.iter().map(|n| n.to_string()).collect::<Vec<String>>())
        .expect("Invalid certificate parameters");
    let cert = params.self_signed(&key_pair).expect("Failed to sign certificate");
    let cert_path = dir.join(format!("{}.pem", name));
    let key_path = dir.join(format!("{}.key", name));
    std::fs::write(&cert_path, cert.pem()).expect("Failed to write certificate");
    std::fs::write(&key_path, key_pair.serialize_pem()).expect("Failed to write key");
    TestCertificate {
        cert_path: cert_path.to_string_lossy().to_string(),
        key_path: key_path.to_string_lossy().to_string(),
        der: cert.der().to_vec(),
    }
}

pub fn create_test_config(certificates: &[(&str, &TestCertificate)]) -> TestConfig {
    let mut config = Configuration::init();
    config.server.bind_address = String::from("127.0.0.1:0");
    config.certificates = certificates
        .iter()
        .map(|(name, certificate)| CertificateConfig {
            name: name.to_string(),
            cert_path: certificate.cert_path.clone(),
            key_path: certificate.key_path.clone(),
        })
        .collect();
    Arc::new(config)
}
