use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in file")]
    NoKeyFound,
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Private key does not match certificate: {0}")]
    KeyMismatch(String),
    #[error("Certificate selection failed: {0}")]
    Selection(String),
    #[error("error while reloading multiple stores: {}", join_errors(.0))]
    Aggregate(Vec<CertificateError>),
    #[error("no cert stores")]
    NoStores,
    #[error("Failed to generate certificate: {0}")]
    Generation(String),
}

impl CertificateError {
    /// True for the errors a file load can produce.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            CertificateError::CertFileNotFound(_)
                | CertificateError::KeyFileNotFound(_)
                | CertificateError::CertParseError(_)
                | CertificateError::KeyParseError(_)
                | CertificateError::NoKeyFound
                | CertificateError::CertifiedKeyError(_)
                | CertificateError::KeyMismatch(_)
        )
    }

    /// Member errors of an aggregate, or the error itself.
    pub fn errors(&self) -> Vec<&CertificateError> {
        match self {
            CertificateError::Aggregate(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

fn join_errors(errors: &[CertificateError]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<String>>()
        .join("; ")
}
