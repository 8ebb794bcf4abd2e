use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("no tokio runtime available to run the reload listener")]
    NoRuntime,
    #[error("failed to register the {signal} signal handler: {source}")]
    SignalRegistration {
        signal: String,
        #[source]
        source: std::io::Error,
    },
    #[error("trigger not supported on this platform: {0}")]
    UnsupportedTrigger(String),
}
