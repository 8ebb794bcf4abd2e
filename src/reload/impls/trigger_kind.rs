use crate::reload::enums::reload_error::ReloadError;
use crate::reload::enums::trigger_kind::TriggerKind;
use crate::reload::enums::trigger_source::TriggerSource;
use std::fmt;

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerKind::Signal(signal) => write!(f, "signal {}", signal),
            TriggerKind::Broadcast(_) => write!(f, "broadcast"),
        }
    }
}

impl TriggerKind {
    /// Subscribes a fresh source. Must run inside a tokio runtime.
    pub fn subscribe(&self) -> Result<TriggerSource, ReloadError> {
        match self {
            #[cfg(unix)]
            TriggerKind::Signal(signal) => tokio::signal::unix::signal(signal.signal_kind())
                .map(TriggerSource::Signal)
                .map_err(|source| ReloadError::SignalRegistration {
                    signal: signal.to_string(),
                    source,
                }),
            #[cfg(not(unix))]
            TriggerKind::Signal(signal) => Err(ReloadError::UnsupportedTrigger(signal.to_string())),
            TriggerKind::Broadcast(sender) => Ok(TriggerSource::Broadcast(sender.subscribe())),
        }
    }
}
