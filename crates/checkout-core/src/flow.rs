//! # Approval Flow
//!
//! The two SDK-driven handlers: order creation on click, capture on buyer
//! approval. The capture result drives exactly one of three paths — restart
//! the SDK flow, notify the buyer of a failure, or fall through to the SDK's
//! own success UI.

use crate::backend::BoxedOrderBackend;
use crate::error::CheckoutResult;
use crate::response::CaptureOutcome;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Payload the SDK hands to the approval handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalData {
    /// Identifier of the order the buyer approved
    #[serde(rename = "orderID")]
    pub order_id: String,
}

/// Actions the payment SDK exposes to the approval handler.
///
/// `restart` re-enters the SDK's funding selection so the buyer can retry a
/// recoverable decline with a different funding source.
#[async_trait(?Send)]
pub trait CheckoutActions {
    async fn restart(&self) -> CheckoutResult<()>;
}

/// Non-blocking surface for user-facing failure messages.
///
/// The wasm layer shows a browser alert; tests record the message.
pub trait UserNotifier {
    fn notify(&self, message: &str);
}

/// Driver for one checkout cycle. Holds no per-cycle state: each
/// click/approval pair is independent.
#[derive(Clone)]
pub struct ApprovalFlow {
    backend: BoxedOrderBackend,
}

impl ApprovalFlow {
    pub fn new(backend: BoxedOrderBackend) -> Self {
        Self { backend }
    }

    /// SDK `createOrder` callback: obtain a server-issued order id.
    ///
    /// Failures propagate to the SDK, which surfaces its own error UI.
    pub async fn create_order(&self) -> CheckoutResult<String> {
        let order_id = self.backend.create_order().await?;
        info!(order_id = %order_id, "order created");
        Ok(order_id)
    }

    /// SDK `onApprove` callback: capture the approved order and act on the
    /// result. Returns the classified outcome so callers can observe it.
    pub async fn on_approve(
        &self,
        data: &ApprovalData,
        actions: &dyn CheckoutActions,
        notifier: &dyn UserNotifier,
    ) -> CheckoutResult<CaptureOutcome> {
        debug!(order_id = %data.order_id, "capturing approved order");
        let response = self.backend.capture_order(&data.order_id).await?;

        let outcome = response.outcome();
        match &outcome {
            CaptureOutcome::Declined => {
                info!(order_id = %data.order_id, "instrument declined, restarting checkout");
                actions.restart().await?;
            }
            CaptureOutcome::Failed { message } => {
                warn!(order_id = %data.order_id, "capture failed");
                notifier.notify(message);
            }
            // Successful capture: the SDK's own confirmation takes over.
            CaptureOutcome::Completed => {
                info!(order_id = %data.order_id, "capture completed");
            }
        }

        Ok(outcome)
    }
}
