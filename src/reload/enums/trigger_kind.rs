use crate::reload::enums::reload_signal::ReloadSignal;
use tokio::sync::broadcast;

/// Event source that asks a registered component to reload.
#[derive(Debug, Clone)]
pub enum TriggerKind {
    /// An operating system signal delivered to the process.
    Signal(ReloadSignal),
    /// A pub/sub event; every registration subscribes its own receiver.
    Broadcast(broadcast::Sender<()>),
}
