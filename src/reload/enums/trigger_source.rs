use tokio::sync::broadcast;

/// A subscribed trigger, owned by one registration's subscription task.
pub enum TriggerSource {
    #[cfg(unix)]
    Signal(tokio::signal::unix::Signal),
    Broadcast(broadcast::Receiver<()>),
}
