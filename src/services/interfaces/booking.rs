use crate::error::AppError;
use crate::model::booking::{Booking, NewBooking};
use crate::services::types::BookingWithPayment;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Interface for the booking service
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Lists all bookings visible to the current user
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError>;

    /// Gets a single booking by its identifier
    async fn get_booking(&self, id: u64) -> Result<Booking, AppError>;

    /// Creates a booking
    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, AppError>;

    /// Replaces a booking
    async fn update_booking(&self, id: u64, booking: &NewBooking) -> Result<Booking, AppError>;

    /// Deletes a booking
    async fn delete_booking(&self, id: u64) -> Result<(), AppError>;

    /// Creates a booking in `pending_payment` status and initiates its payment
    ///
    /// # Arguments
    /// * `car` - Identifier of the car to book
    /// * `start_date` - First rental day
    /// * `end_date` - Last rental day
    /// * `amount` - Total amount to charge
    async fn create_booking_with_payment(
        &self,
        car: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        amount: f64,
    ) -> Result<BookingWithPayment, AppError>;
}
