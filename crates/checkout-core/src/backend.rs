//! # Order Backend Trait
//!
//! Seam between the checkout flow and the server that actually creates and
//! captures orders. The HTTP implementation lives in `checkout-http`; tests
//! substitute in-memory fakes.
//!
//! Futures here are `?Send`: the flow runs on a single event loop (the
//! browser's on wasm, a current-thread runtime in tests) and the wasm
//! implementation holds JS interop types that cannot cross threads.

use crate::error::CheckoutResult;
use crate::response::CaptureResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// A server that can create orders and capture approved ones.
#[async_trait(?Send)]
pub trait OrderBackend {
    /// Ask the server to create an order and return its opaque identifier.
    ///
    /// Invoked by the SDK when the buyer clicks the button; the returned id
    /// is handed straight back to the SDK, which owns it until approval.
    async fn create_order(&self) -> CheckoutResult<String>;

    /// Ask the server to capture a previously approved order.
    ///
    /// The response is returned unclassified; callers drive the
    /// restart/failure/success decision via [`CaptureResponse::outcome`].
    async fn capture_order(&self, order_id: &str) -> CheckoutResult<CaptureResponse>;
}

/// Type alias for a shared order backend (dynamic dispatch)
pub type BoxedOrderBackend = Arc<dyn OrderBackend>;
