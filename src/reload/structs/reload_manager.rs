use crate::reload::structs::registration::Registration;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Registry of triggered reloads, keyed by the identity of the registered
/// `Arc` allocation.
pub struct ReloadManager {
    pub(crate) registrations: Mutex<HashMap<usize, Registration>>,
}
