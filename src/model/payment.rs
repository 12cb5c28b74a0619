use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a payment
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Created, waiting for the provider to confirm
    Pending,
    /// Confirmed by the provider
    Succeeded,
    /// Cancelled or rejected
    Cancelled,
}

/// A payment as returned by the rental backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    /// Provider-side identifier, used to poll the payment status
    pub id: String,
    /// Identifier of the booking being paid
    pub booking_id: u64,
    /// Amount charged
    pub amount: f64,
    /// Current lifecycle state
    pub status: PaymentStatus,
    /// Human-readable description shown on the payment page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for initiating a payment
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPayment {
    /// Identifier of the booking to pay
    pub booking_id: u64,
    /// Amount to charge
    pub amount: f64,
    /// Human-readable description shown on the payment page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
