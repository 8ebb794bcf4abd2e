use crate::reload::enums::reload_error::ReloadError;
use crate::reload::enums::trigger_kind::TriggerKind;
use crate::reload::reload::{forward_triggers, listen};
use crate::reload::structs::registration::Registration;
use crate::reload::structs::reload_manager::ReloadManager;
use crate::reload::structs::reload_status::ReloadStatus;
use crate::ssl::traits::reloadable::Reloadable;
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

fn identity<R: ?Sized>(reloadable: &Arc<R>) -> usize {
    Arc::as_ptr(reloadable) as *const () as usize
}

impl Default for ReloadManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReloadManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registrations = self.registrations.lock();
        f.debug_struct("ReloadManager")
            .field(
                "registrations",
                &registrations
                    .values()
                    .map(|registration| format!("{} ({})", registration.label, registration.trigger))
                    .collect::<Vec<String>>(),
            )
            .finish()
    }
}

impl ReloadManager {
    pub fn new() -> ReloadManager {
        ReloadManager {
            registrations: Mutex::new(HashMap::new()),
        }
    }

    /// Reloads `reloadable` every time `trigger` fires.
    ///
    /// Returns `Ok(false)` without touching anything when the same `Arc`
    /// allocation is already registered, whatever its trigger. Needs to be
    /// called from within a tokio runtime.
    pub fn notify<R>(&self, reloadable: Arc<R>, trigger: TriggerKind) -> Result<bool, ReloadError>
    where
        R: Reloadable + ?Sized + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| ReloadError::NoRuntime)?;
        let key = identity(&reloadable);
        let mut registrations = self.registrations.lock();
        if registrations.contains_key(&key) {
            debug!("[RELOAD] {} already has a reload trigger", std::any::type_name::<R>());
            return Ok(false);
        }
        let label = std::any::type_name::<R>().to_string();
        let source = {
            let _guard = runtime.enter();
            trigger.subscribe()?
        };
        let (sender, receiver) = mpsc::channel::<()>(1);
        let status = Arc::new(RwLock::new(ReloadStatus {
            listening: true,
            ..Default::default()
        }));
        let listener = runtime.spawn(listen(reloadable, receiver, Arc::clone(&status), label.clone()));
        let subscription = runtime.spawn(forward_triggers(source, sender.downgrade(), label.clone()));
        info!("[RELOAD] Reloading {} on {}", label, trigger);
        registrations.insert(
            key,
            Registration {
                label,
                trigger: trigger.to_string(),
                sender,
                subscription,
                listener,
                status,
            },
        );
        Ok(true)
    }

    /// Removes the registration of `reloadable`. Returns `false` when there
    /// was none. Does not wait for a reload in progress.
    pub fn stop<R: ?Sized>(&self, reloadable: &Arc<R>) -> bool {
        match self.registrations.lock().remove(&identity(reloadable)) {
            Some(registration) => {
                info!("[RELOAD] Stopped {} trigger for {}", registration.trigger, registration.label);
                true
            }
            None => false,
        }
    }

    /// Queues a reload outside of the trigger source.
    ///
    /// Accepted also when a reload is already pending, as that one covers it.
    pub fn trigger<R: ?Sized>(&self, reloadable: &Arc<R>) -> bool {
        match self.registrations.lock().get(&identity(reloadable)) {
            Some(registration) => !matches!(registration.sender.try_send(()), Err(TrySendError::Closed(_))),
            None => false,
        }
    }

    pub fn is_registered<R: ?Sized>(&self, reloadable: &Arc<R>) -> bool {
        self.registrations.lock().contains_key(&identity(reloadable))
    }

    pub fn status<R: ?Sized>(&self, reloadable: &Arc<R>) -> Option<ReloadStatus> {
        self.registrations
            .lock()
            .get(&identity(reloadable))
            .map(|registration| registration.status())
    }

    pub fn len(&self) -> usize {
        self.registrations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.lock().is_empty()
    }

    /// Removes every registration, returning how many there were.
    pub fn stop_all(&self) -> usize {
        let registrations = std::mem::take(&mut *self.registrations.lock());
        let count = registrations.len();
        if count > 0 {
            info!("[RELOAD] Stopped {} reload trigger(s)", count);
        }
        count
    }
}

impl Drop for ReloadManager {
    fn drop(&mut self) {
        self.stop_all();
    }
}
