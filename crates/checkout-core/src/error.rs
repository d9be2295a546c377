//! # Checkout Error Types
//!
//! Typed error handling for the checkout bridge.
//! All fallible operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing env vars, invalid base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP error talking to the backend
    #[error("Network error: {0}")]
    Network(String),

    /// Backend response was not JSON, or did not match the wire contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The payment SDK's own action (e.g. restart) failed
    #[error("Checkout SDK error: {0}")]
    Sdk(String),
}

impl CheckoutError {
    /// Returns true if this error came from the transport layer rather than
    /// from the payload or the caller's configuration.
    pub fn is_transport(&self) -> bool {
        matches!(self, CheckoutError::Network(_))
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
