//! # Backend Wire Types
//!
//! Response payloads for the order-creation and capture endpoints, and the
//! closed `CaptureOutcome` classification the approval flow drives on.
//!
//! The backend owns the response shape and may add fields freely; only the
//! fields consumed here are declared, everything else is ignored. A
//! `details` field of the wrong shape fails deserialization instead of
//! silently reading as a success.

use serde::{Deserialize, Serialize};

/// Issue code for a recoverable funding failure: the buyer can pick another
/// funding source without restarting the whole checkout.
pub const INSTRUMENT_DECLINED: &str = "INSTRUMENT_DECLINED";

/// Base text of the non-recoverable failure message shown to the buyer
pub const FAILURE_MESSAGE: &str = "Sorry, your transaction could not be processed.";

/// Response of the order-creation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// Opaque order identifier, handed back to the payment SDK
    pub id: String,
}

/// One error detail entry in a capture response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable issue code (e.g. `INSTRUMENT_DECLINED`)
    pub issue: String,

    /// Human-readable description of the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of the capture endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureResponse {
    /// Error details; absent on a successful capture
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,

    /// Correlation id for support lookups, appended to failure messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_id: Option<String>,
}

impl CaptureResponse {
    /// First error detail, if the backend reported any
    pub fn error_detail(&self) -> Option<&ErrorDetail> {
        self.details.first()
    }

    /// Classify this response. First match wins:
    /// a leading `INSTRUMENT_DECLINED` detail is a recoverable decline, any
    /// other leading detail is a failure with a user-facing message, and no
    /// detail at all is a completed capture.
    pub fn outcome(&self) -> CaptureOutcome {
        match self.error_detail() {
            Some(detail) if detail.issue == INSTRUMENT_DECLINED => CaptureOutcome::Declined,
            Some(detail) => CaptureOutcome::Failed {
                message: self.failure_message(detail),
            },
            None => CaptureOutcome::Completed,
        }
    }

    fn failure_message(&self, detail: &ErrorDetail) -> String {
        let mut msg = FAILURE_MESSAGE.to_string();
        if let Some(description) = &detail.description {
            msg.push_str("\n\n");
            msg.push_str(description);
        }
        if let Some(debug_id) = &self.debug_id {
            msg.push_str(" (");
            msg.push_str(debug_id);
            msg.push(')');
        }
        msg
    }
}

/// Outcome of a capture attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Payment captured; the SDK's own success UI takes over
    Completed,

    /// Recoverable funding failure; restart the SDK flow so the buyer can
    /// pick another funding source
    Declined,

    /// Non-recoverable failure with the message to show the buyer
    Failed { message: String },
}

impl CaptureOutcome {
    /// True for a captured payment
    pub fn is_completed(&self) -> bool {
        matches!(self, CaptureOutcome::Completed)
    }
}
