//! HTTP helper for the JSON auth API. The gateway posts a JSON body, reports
//! the HTTP outcome, and parses the response leniently so business-logic
//! interpretation stays with the caller. It makes one attempt per call and
//! never logs request bodies.

use super::{config::build_url_with_base, errors::AppError};
use crate::{
    auth::gateway::{GatewayResponse, RequestGateway},
    APP_USER_AGENT,
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Builds a gateway rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RequestGateway for HttpGateway {
    #[instrument(skip(self, body))]
    async fn send(&self, endpoint: &str, body: &Value) -> Result<GatewayResponse, AppError> {
        let url = build_url_with_base(&self.base_url, endpoint);
        let payload = serde_json::to_vec(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        let data = match response.bytes().await {
            Ok(bytes) => parse_body(&bytes),
            Err(err) => {
                debug!("failed to read response body: {err}");
                None
            }
        };

        debug!(status = status.as_u16(), has_body = data.is_some(), "response received");

        Ok(GatewayResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            data,
        })
    }
}

/// Parses a JSON body, treating empty or malformed bodies as absent.
fn parse_body(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice(bytes).ok()
}

fn map_request_error(err: reqwest::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_body_accepts_json() {
        assert_eq!(
            parse_body(br#"{"detail":"Not found"}"#),
            Some(json!({ "detail": "Not found" }))
        );
        assert_eq!(parse_body(b"\"text\""), Some(json!("text")));
    }

    #[test]
    fn parse_body_degrades_to_none() {
        assert_eq!(parse_body(b""), None);
        assert_eq!(parse_body(b"<html>Bad Gateway</html>"), None);
        assert_eq!(parse_body(b"{\"truncated\":"), None);
    }

    #[test]
    fn new_keeps_the_base_url() {
        let gateway = HttpGateway::new("http://localhost:8000");
        assert!(gateway.is_ok_and(|gateway| gateway.base_url() == "http://localhost:8000"));
    }
}
