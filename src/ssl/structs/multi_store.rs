use crate::ssl::traits::store::Store;
use std::sync::Arc;

/// Ordered list of stores acting as one.
///
/// Earlier stores take priority during selection; the first store is the
/// fallback when nothing matches.
pub struct MultiStore {
    pub(crate) stores: Vec<Arc<dyn Store>>,
}
