//! # checkout-core
//!
//! Core types and seams for the paypal-checkout-rs button bridge.
//!
//! This crate provides:
//! - `cookie_value` and `CsrfToken` for reading the CSRF token out of the
//!   browser cookie jar
//! - `CreateOrderResponse`, `CaptureResponse`, and `CaptureOutcome` for the
//!   backend wire contract
//! - `OrderBackend` trait for the server that creates and captures orders
//! - `ApprovalFlow` with the `CheckoutActions` / `UserNotifier` seams for
//!   the restart / failure / success decision logic
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{ApprovalData, ApprovalFlow, CsrfToken};
//!
//! // Source the token once at startup
//! let token = CsrfToken::from_jar(&cookie_jar).unwrap();
//!
//! // Wire the flow to an OrderBackend implementation
//! let flow = ApprovalFlow::new(backend);
//!
//! // SDK createOrder callback
//! let order_id = flow.create_order().await?;
//!
//! // SDK onApprove callback
//! let outcome = flow.on_approve(&ApprovalData { order_id }, &actions, &notifier).await?;
//! ```

pub mod backend;
pub mod cookie;
pub mod error;
pub mod flow;
pub mod response;

// Re-exports for convenience
pub use backend::{BoxedOrderBackend, OrderBackend};
pub use cookie::{cookie_value, CsrfToken, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
pub use error::{CheckoutError, CheckoutResult};
pub use flow::{ApprovalData, ApprovalFlow, CheckoutActions, UserNotifier};
pub use response::{
    CaptureOutcome, CaptureResponse, CreateOrderResponse, ErrorDetail, FAILURE_MESSAGE,
    INSTRUMENT_DECLINED,
};
