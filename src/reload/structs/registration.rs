use crate::reload::structs::reload_status::ReloadStatus;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One active reload trigger.
///
/// Dropping it aborts the subscription task and closes the delivery
/// channel; the listener then runs out on its own.
pub struct Registration {
    pub(crate) label: String,
    pub(crate) trigger: String,
    pub(crate) sender: mpsc::Sender<()>,
    pub(crate) subscription: JoinHandle<()>,
    pub(crate) listener: JoinHandle<()>,
    pub(crate) status: Arc<RwLock<ReloadStatus>>,
}
