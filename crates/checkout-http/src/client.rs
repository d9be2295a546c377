//! # HTTP Order Backend
//!
//! `OrderBackend` implementation over the backend's order-creation and
//! capture endpoints. One request per operation, no retries — recovery
//! belongs to the SDK's restart action and the backend's own idempotency.

use crate::config::BackendConfig;
use async_trait::async_trait;
use checkout_core::{
    CaptureResponse, CheckoutError, CheckoutResult, CreateOrderResponse, OrderBackend,
    CSRF_HEADER_NAME,
};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// HTTP client for the order backend.
///
/// Works natively and on wasm (where reqwest rides the browser fetch API).
/// No request timeout is set: a hung request leaves the SDK's UI waiting,
/// which is the documented behavior of this integration.
pub struct HttpOrderBackend {
    config: BackendConfig,
    client: Client,
}

impl HttpOrderBackend {
    /// Create a backend client for the given configuration
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create from environment variables (see [`BackendConfig::from_env`])
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> CheckoutResult<Self> {
        Ok(Self::new(BackendConfig::from_env()?))
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn post_and_parse<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> CheckoutResult<T> {
        let response = request
            .header(CSRF_HEADER_NAME, self.config.csrf_token.as_str())
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            // Declines and CSRF rejections still arrive as JSON bodies;
            // parse rather than short-circuit on status.
            warn!(status = %status, "backend returned non-success status");
        }

        serde_json::from_str(&body).map_err(|e| {
            CheckoutError::MalformedResponse(format!("HTTP {}: {}", status, e))
        })
    }
}

#[async_trait(?Send)]
impl OrderBackend for HttpOrderBackend {
    #[instrument(skip(self))]
    async fn create_order(&self) -> CheckoutResult<String> {
        let url = self.config.create_order_url();
        debug!(url = %url, "creating order");

        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        let order: CreateOrderResponse = self.post_and_parse(request).await?;

        info!(order_id = %order.id, "order created");
        Ok(order.id)
    }

    #[instrument(skip(self))]
    async fn capture_order(&self, order_id: &str) -> CheckoutResult<CaptureResponse> {
        let url = self.config.capture_order_url(order_id);
        debug!(url = %url, "capturing order");

        self.post_and_parse(self.client.post(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{CaptureOutcome, CsrfToken};
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn backend_for(server: &MockServer) -> HttpOrderBackend {
        let config = BackendConfig::new(server.uri(), CsrfToken::new("tok42")).unwrap();
        HttpOrderBackend::new(config)
    }

    #[tokio::test]
    async fn test_create_order_happy_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment/paypal/"))
            .and(header("X-CSRFToken", "tok42"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ORDER1"})))
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        assert_eq!(backend.create_order().await.unwrap(), "ORDER1");
    }

    #[tokio::test]
    async fn test_create_order_missing_id_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment/paypal/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let result = backend.create_order().await;
        assert!(matches!(result, Err(CheckoutError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_capture_sends_token_and_embeds_order_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment/paypal/capture/ORDER1/"))
            .and(header("X-CSRFToken", "tok42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let response = backend.capture_order("ORDER1").await.unwrap();
        assert_eq!(response.outcome(), CaptureOutcome::Completed);
    }

    #[tokio::test]
    async fn test_capture_decline_parses_from_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment/paypal/capture/ORDER2/"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "details": [{"issue": "INSTRUMENT_DECLINED"}],
                "debug_id": "DBG9"
            })))
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let response = backend.capture_order("ORDER2").await.unwrap();
        assert_eq!(response.outcome(), CaptureOutcome::Declined);
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment/paypal/capture/ORDER3/"))
            .respond_with(ResponseTemplate::new(403).set_body_string("<html>Forbidden</html>"))
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let result = backend.capture_order("ORDER3").await;
        assert!(matches!(result, Err(CheckoutError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_network_error() {
        let config =
            BackendConfig::new("http://127.0.0.1:1", CsrfToken::new("tok42")).unwrap();
        let backend = HttpOrderBackend::new(config);

        let result = backend.create_order().await;
        assert!(matches!(result, Err(CheckoutError::Network(_))));
    }
}
