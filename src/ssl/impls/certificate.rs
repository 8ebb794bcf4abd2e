use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate::Certificate;
use crate::ssl::structs::handshake_info::HandshakeInfo;
use chrono::{DateTime, Utc};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use x509_parser::prelude::*;

impl std::fmt::Debug for Certificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Certificate")
            .field("certs_count", &self.certified_key.cert.len())
            .field("names", &self.names)
            .field("not_after", &self.not_after)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl Certificate {
    /// Loads a PEM certificate chain and its PEM private key.
    ///
    /// The key may be PKCS#8, PKCS#1 or SEC1 and has to belong to the leaf
    /// certificate. Nothing is returned unless every step succeeds.
    pub fn load_from_files(cert_path: &str, key_path: &str) -> Result<Certificate, CertificateError> {
        let certs = Self::read_certificates(cert_path)?;
        let key = Self::read_private_key(key_path)?;
        let (names, not_after) = Self::inspect_leaf(&certs[0])?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::CertifiedKeyError(e.to_string()))?;
        let certified_key = CertifiedKey::new(certs, signing_key);
        certified_key
            .keys_match()
            .map_err(|e| CertificateError::KeyMismatch(format!("{}: {}", key_path, e)))?;
        Ok(Certificate {
            certified_key: Arc::new(certified_key),
            names,
            not_after,
            loaded_at: Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn leaf(&self) -> &CertificateDer<'static> {
        &self.certified_key.cert[0]
    }

    pub fn is_expired(&self) -> bool {
        self.not_after
            .map(|not_after| Utc::now() > not_after)
            .unwrap_or(false)
    }

    /// Standard server certificate selection: the key must sign with one of
    /// the offered schemes and a requested server name must be covered.
    pub fn supports(&self, handshake: &HandshakeInfo) -> bool {
        if !handshake.signature_schemes.is_empty()
            && self
                .certified_key
                .key
                .choose_scheme(&handshake.signature_schemes)
                .is_none()
        {
            return false;
        }
        match handshake.server_name.as_deref() {
            None => true,
            Some(server_name) => self.matches_server_name(server_name),
        }
    }

    pub fn matches_server_name(&self, server_name: &str) -> bool {
        self.names
            .iter()
            .any(|name| dns_name_matches(name, server_name))
    }

    fn read_certificates(cert_path: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
        let certs_file = File::open(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let mut certs_reader = BufReader::new(certs_file);
        let certs = rustls_pemfile::certs(&mut certs_reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(format!("{}: {}", cert_path, e)))?;
        if certs.is_empty() {
            return Err(CertificateError::CertParseError(format!(
                "{}: No certificates found in file",
                cert_path
            )));
        }
        Ok(certs)
    }

    fn read_private_key(key_path: &str) -> Result<PrivateKeyDer<'static>, CertificateError> {
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let mut key_reader = BufReader::new(key_file);
        match rustls_pemfile::private_key(&mut key_reader) {
            Ok(Some(key)) => Ok(key),
            Ok(None) => Err(CertificateError::NoKeyFound),
            Err(e) => Err(CertificateError::KeyParseError(format!("{}: {}", key_path, e))),
        }
    }

    fn inspect_leaf(
        leaf: &CertificateDer<'_>,
    ) -> Result<(Vec<String>, Option<DateTime<Utc>>), CertificateError> {
        let (_, cert) = X509Certificate::from_der(leaf.as_ref())
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        let mut names: Vec<String> = Vec::new();
        if let Ok(Some(san)) = cert.subject_alternative_name() {
            for general_name in &san.value.general_names {
                if let GeneralName::DNSName(dns_name) = general_name {
                    names.push(dns_name.to_string());
                }
            }
        }
        // Legacy certificates only carry the host in the subject CN.
        if names.is_empty() {
            names.extend(
                cert.subject()
                    .iter_common_name()
                    .filter_map(|cn| cn.as_str().ok())
                    .map(|cn| cn.to_string()),
            );
        }
        let not_after = DateTime::<Utc>::from_timestamp(cert.validity().not_after.timestamp(), 0);
        Ok((names, not_after))
    }
}

/// Case-insensitive host match; `*.` covers exactly one leftmost label.
pub fn dns_name_matches(pattern: &str, server_name: &str) -> bool {
    let pattern = pattern.strip_suffix('.').unwrap_or(pattern).to_ascii_lowercase();
    let server_name = server_name
        .strip_suffix('.')
        .unwrap_or(server_name)
        .to_ascii_lowercase();
    match pattern.strip_prefix("*.") {
        Some(suffix) => match server_name.split_once('.') {
            Some((label, rest)) => !label.is_empty() && rest == suffix,
            None => false,
        },
        None => pattern == server_name,
    }
}
