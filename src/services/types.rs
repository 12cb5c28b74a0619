use crate::model::booking::Booking;
use crate::model::payment::Payment;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Result of the combined book-and-pay flow
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingWithPayment {
    /// The booking, created in `pending_payment` status
    pub booking: Booking,
    /// The payment initiated for it
    pub payment: Payment,
}
