//! # checkout-http
//!
//! HTTP implementation of the `checkout-core` order backend.
//!
//! Talks to the same-origin backend that fronts the payment provider:
//!
//! | Endpoint | Method | Purpose |
//! |---|---|---|
//! | `/payment/paypal/` | POST | create an order, returns `{ "id": ... }` |
//! | `/payment/paypal/capture/{orderID}/` | POST | capture an approved order |
//!
//! Both requests carry the CSRF token from [`BackendConfig`] in the
//! `X-CSRFToken` header.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_core::{CsrfToken, OrderBackend};
//! use checkout_http::{BackendConfig, HttpOrderBackend};
//!
//! let config = BackendConfig::new("https://shop.example.com", CsrfToken::new(token))?;
//! let backend = HttpOrderBackend::new(config);
//!
//! let order_id = backend.create_order().await?;
//! // ...buyer approves in the SDK...
//! let outcome = backend.capture_order(&order_id).await?.outcome();
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::HttpOrderBackend;
pub use config::{BackendConfig, CAPTURE_ORDER_PATH, CREATE_ORDER_PATH};
