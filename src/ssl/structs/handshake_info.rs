use rustls::SignatureScheme;

/// Client capabilities advertised in a TLS client hello.
///
/// Owned copy of what `rustls::server::ClientHello` exposes, so stores can
/// be queried outside of a live handshake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandshakeInfo {
    pub server_name: Option<String>,
    pub signature_schemes: Vec<SignatureScheme>,
}
