use serde::Deserialize;

/// `?token=` query parameter of the `/api` endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct QueryToken {
    pub(crate) token: Option<String>,
}
