use crate::ssl::structs::handshake_info::HandshakeInfo;
use rustls::SignatureScheme;
use rustls::server::ClientHello;

impl HandshakeInfo {
    pub fn from_client_hello(client_hello: &ClientHello<'_>) -> HandshakeInfo {
        HandshakeInfo {
            server_name: client_hello.server_name().map(|name| name.to_string()),
            signature_schemes: client_hello.signature_schemes().to_vec(),
        }
    }

    pub fn with_server_name(mut self, server_name: &str) -> HandshakeInfo {
        self.server_name = Some(server_name.to_string());
        self
    }

    pub fn with_signature_schemes(mut self, signature_schemes: &[SignatureScheme]) -> HandshakeInfo {
        self.signature_schemes = signature_schemes.to_vec();
        self
    }
}

impl std::fmt::Display for HandshakeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sni={} schemes={}",
            self.server_name.as_deref().unwrap_or("-"),
            self.signature_schemes.len()
        )
    }
}
