use crate::reload::enums::trigger_source::TriggerSource;
use crate::reload::structs::reload_status::ReloadStatus;
use crate::ssl::traits::reloadable::Reloadable;
use log::{debug, error, info};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Pushes trigger events into a registration's delivery channel.
///
/// Holds only a weak sender so the channel closes as soon as the
/// registration is gone. A full channel means a reload is already pending.
pub async fn forward_triggers(mut source: TriggerSource, sender: mpsc::WeakSender<()>, label: String) {
    while source.recv().await.is_some() {
        let Some(sender) = sender.upgrade() else {
            break;
        };
        if sender.try_send(()).is_err() {
            debug!("[RELOAD] Reload already pending for {}", label);
        }
    }
    debug!("[RELOAD] Trigger source for {} ended", label);
}

/// Runs one reload per delivery until the delivery channel is closed.
pub async fn listen<R>(
    reloadable: Arc<R>,
    mut receiver: mpsc::Receiver<()>,
    status: Arc<RwLock<ReloadStatus>>,
    label: String,
) where
    R: Reloadable + ?Sized + 'static,
{
    debug!("[RELOAD] Listener started for {}", label);
    while receiver.recv().await.is_some() {
        if receiver.is_closed() {
            debug!("[RELOAD] Discarding pending reload for stopped {}", label);
            break;
        }
        let target = Arc::clone(&reloadable);
        let outcome = match tokio::task::spawn_blocking(move || target.reload()).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(e) => Err(format!("reload task failed: {}", e)),
        };
        match &outcome {
            Ok(()) => info!("[RELOAD] Reloaded {}", label),
            Err(e) => error!(
                "[RELOAD] Keeping old TLS certificate because the new one could not be loaded: {}",
                e
            ),
        }
        status.write().record(outcome);
    }
    status.write().listening = false;
    debug!("[RELOAD] Listener stopped for {}", label);
}
