use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::reload_config::ReloadConfig;
use crate::config::structs::server_config::ServerConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub api_key: String,
    pub server: ServerConfig,
    pub reload: ReloadConfig,
    pub certificates: Vec<CertificateConfig>,
}
