use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CertificateConfig {
    pub name: String,
    pub cert_path: String,
    pub key_path: String,
}
