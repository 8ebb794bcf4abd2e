use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub keep_alive: Option<u64>,
    pub request_timeout: Option<u64>,
    pub disconnect_timeout: Option<u64>,
    pub max_connections: Option<u64>,
    pub workers: Option<u64>,
    pub tls_connection_rate: Option<u64>,
    /// Serve the first certificate when none matches the client hello.
    #[serde(default = "default_fallback")]
    pub fallback_to_default: bool,
}

fn default_fallback() -> bool {
    true
}
