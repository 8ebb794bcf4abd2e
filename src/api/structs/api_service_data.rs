//! Shared data context for request handlers.

use crate::config::structs::configuration::Configuration;
use crate::reload::structs::reload_manager::ReloadManager;
use crate::ssl::structs::file_store::FileStore;
use crate::ssl::structs::multi_store::MultiStore;
use std::sync::Arc;

/// Shared application data available to all request handlers.
///
/// `stores` and `multi_store` hold the same file stores: the named list is
/// what the API reports on, the multi store is what serves handshakes and
/// what the reload trigger is registered for.
#[derive(Debug)]
pub struct ApiServiceData {
    pub config: Arc<Configuration>,
    pub stores: Vec<(String, Arc<FileStore>)>,
    pub multi_store: Arc<MultiStore>,
    pub reload_manager: Arc<ReloadManager>,
}
