use crate::ssl::traits::store::Store;
use std::sync::Arc;

pub struct StoreResolver {
    pub(crate) store: Arc<dyn Store>,
    pub(crate) fallback_to_default: bool,
}
