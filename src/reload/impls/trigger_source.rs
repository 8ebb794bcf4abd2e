use crate::reload::enums::trigger_source::TriggerSource;
use tokio::sync::broadcast::error::RecvError;

impl TriggerSource {
    /// Waits for the next event; `None` once the source can never fire again.
    pub async fn recv(&mut self) -> Option<()> {
        match self {
            #[cfg(unix)]
            TriggerSource::Signal(signal) => signal.recv().await,
            TriggerSource::Broadcast(receiver) => match receiver.recv().await {
                // Missed events still mean "reload".
                Ok(()) | Err(RecvError::Lagged(_)) => Some(()),
                Err(RecvError::Closed) => None,
            },
        }
    }
}
