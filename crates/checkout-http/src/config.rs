//! # Backend Configuration
//!
//! Where the order backend lives and which CSRF token to present to it.
//! The token is injected explicitly — sourced once by the calling context
//! (from `document.cookie` in the browser, from the environment natively)
//! rather than read ambiently at request time.

use checkout_core::{CheckoutError, CsrfToken};

/// Path of the order-creation endpoint
pub const CREATE_ORDER_PATH: &str = "/payment/paypal/";

/// Path prefix of the capture endpoint; the order id and a trailing slash
/// complete it
pub const CAPTURE_ORDER_PATH: &str = "/payment/paypal/capture/";

/// Order backend configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Origin of the backend, without a trailing slash
    /// (e.g. `https://shop.example.com`)
    pub base_url: String,

    /// CSRF token sent on every state-changing request
    pub csrf_token: CsrfToken,
}

impl BackendConfig {
    /// Create a config with explicit values
    pub fn new(base_url: impl Into<String>, csrf_token: CsrfToken) -> Result<Self, CheckoutError> {
        let base_url = base_url.into();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CheckoutError::Configuration(
                "base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `CHECKOUT_BASE_URL`
    /// - `CHECKOUT_CSRF_TOKEN`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = std::env::var("CHECKOUT_BASE_URL").map_err(|_| {
            CheckoutError::Configuration("CHECKOUT_BASE_URL not set".to_string())
        })?;

        let csrf_token = std::env::var("CHECKOUT_CSRF_TOKEN").map_err(|_| {
            CheckoutError::Configuration("CHECKOUT_CSRF_TOKEN not set".to_string())
        })?;

        Self::new(base_url, CsrfToken::new(csrf_token))
    }

    /// URL of the order-creation endpoint
    pub fn create_order_url(&self) -> String {
        format!("{}{}", self.base_url, CREATE_ORDER_PATH)
    }

    /// URL of the capture endpoint for an order. The id is embedded
    /// verbatim: it is opaque and owned by the backend.
    pub fn capture_order_url(&self, order_id: &str) -> String {
        format!("{}{}{}/", self.base_url, CAPTURE_ORDER_PATH, order_id)
    }
}
