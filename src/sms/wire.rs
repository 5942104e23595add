use serde::Deserialize;

/// Acceptance body for a created message.
#[derive(Deserialize)]
pub(crate) struct MessageNode {
    pub(crate) sid: Option<String>,
    pub(crate) status: Option<String>,
}

/// Error body shape on non-2xx responses.
#[derive(Deserialize)]
pub(crate) struct ApiErrorNode {
    pub(crate) code: Option<i64>,
    pub(crate) message: Option<String>,
}
