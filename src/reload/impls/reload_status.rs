use crate::reload::structs::reload_status::ReloadStatus;
use chrono::Utc;

impl ReloadStatus {
    pub fn record(&mut self, outcome: Result<(), String>) {
        self.reloads += 1;
        self.last_reload_at = Some(Utc::now());
        match outcome {
            Ok(()) => self.last_error = None,
            Err(error) => {
                self.failures += 1;
                self.last_error = Some(error);
            }
        }
    }

    /// True when the latest reload, if any, succeeded.
    pub fn is_healthy(&self) -> bool {
        self.last_error.is_none()
    }
}
