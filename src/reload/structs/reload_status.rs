use chrono::{DateTime, Utc};

/// Outcome history of one registration's reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadStatus {
    pub trigger: String,
    pub reloads: u64,
    pub failures: u64,
    pub last_reload_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub listening: bool,
}
