use crate::reload::enums::reload_signal::ReloadSignal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReloadConfig {
    pub enabled: bool,
    #[serde(default)]
    pub signal: ReloadSignal,
}
