use crate::reload::structs::registration::Registration;
use crate::reload::structs::reload_status::ReloadStatus;

impl Registration {
    pub fn status(&self) -> ReloadStatus {
        let mut status = self.status.read().clone();
        status.trigger = self.trigger.clone();
        status.listening = !self.listener.is_finished();
        status
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.subscription.abort();
    }
}
