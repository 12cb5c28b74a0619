use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created but waiting for its payment to complete
    PendingPayment,
    /// Payment received, booking active
    Confirmed,
    /// Cancelled by the user or the backend
    Cancelled,
    /// Rental period finished
    Completed,
}

/// A booking as returned by the rental backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Unique identifier of the booking
    pub id: u64,
    /// Identifier of the booked car
    pub car: u64,
    /// First rental day
    pub start_date: NaiveDate,
    /// Last rental day
    pub end_date: NaiveDate,
    /// Current lifecycle state
    pub status: BookingStatus,
    /// Total price quoted by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or replacing a booking
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    /// Identifier of the car to book
    pub car: u64,
    /// First rental day
    pub start_date: NaiveDate,
    /// Last rental day
    pub end_date: NaiveDate,
    /// Initial lifecycle state; the backend defaults it when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_value(BookingStatus::PendingPayment).unwrap();
        assert_eq!(json, "pending_payment");
    }

    #[test]
    fn new_booking_omits_unset_status() {
        let booking = NewBooking {
            car: 3,
            start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
            status: None,
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert!(json.get("status").is_none());
        assert_eq!(json["start_date"], "2026-07-01");
    }
}
