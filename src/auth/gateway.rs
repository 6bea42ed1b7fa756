//! Request seam between the submission flow and the network.

use crate::app::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Normalized outcome of one request.
///
/// `ok` reflects the HTTP status only; whether the API accepted the request is
/// left to the caller. `data` is `None` whenever the body is empty or not JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayResponse {
    pub ok: bool,
    pub status: u16,
    pub data: Option<Value>,
}

#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// Sends `body` as JSON to `endpoint`, exactly once.
    ///
    /// # Errors
    /// Returns an error only when the request could not complete.
    async fn send(&self, endpoint: &str, body: &Value) -> Result<GatewayResponse, AppError>;
}
