use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CertificateReloadRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CertificateStatusItem {
    pub name: String,
    pub cert_path: String,
    pub key_path: String,
    pub names: Vec<String>,
    pub loaded_at: String,
    pub not_after: Option<String>,
    pub expired: bool,
}

#[derive(Debug, Serialize)]
pub struct CertificateReloadResult {
    pub name: String,
    pub loaded_at: String,
}

#[derive(Debug, Serialize)]
pub struct CertificateReloadError {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ReloadTriggerStatus {
    pub registered: bool,
    pub trigger: Option<String>,
    pub listening: bool,
    pub reloads: u64,
    pub failures: u64,
    pub last_reload_at: Option<String>,
    pub last_error: Option<String>,
}
