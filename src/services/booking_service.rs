use crate::client::RentalClient;
use crate::endpoints;
use crate::error::AppError;
use crate::model::booking::{Booking, BookingStatus, NewBooking};
use crate::model::payment::NewPayment;
use crate::services::interfaces::booking::BookingService;
use crate::services::types::BookingWithPayment;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Booking service backed by the request gateway
pub struct BookingServiceImpl {
    client: Arc<RentalClient>,
}

impl BookingServiceImpl {
    /// Creates a new booking service
    ///
    /// # Arguments
    /// * `client` - Shared gateway the requests are issued through
    pub fn new(client: Arc<RentalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.client.get(endpoints::BOOKINGS).await
    }

    async fn get_booking(&self, id: u64) -> Result<Booking, AppError> {
        self.client.get(&endpoints::booking_detail(id)).await
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        self.client.post(endpoints::BOOKINGS, booking).await
    }

    async fn update_booking(&self, id: u64, booking: &NewBooking) -> Result<Booking, AppError> {
        self.client.put(&endpoints::booking_detail(id), booking).await
    }

    async fn delete_booking(&self, id: u64) -> Result<(), AppError> {
        self.client.delete(&endpoints::booking_detail(id)).await
    }

    async fn create_booking_with_payment(
        &self,
        car: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        amount: f64,
    ) -> Result<BookingWithPayment, AppError> {
        let booking = self
            .create_booking(&NewBooking {
                car,
                start_date,
                end_date,
                status: Some(BookingStatus::PendingPayment),
            })
            .await?;

        let payment: crate::model::payment::Payment = self
            .client
            .post(
                endpoints::PAYMENTS_CREATE,
                &NewPayment {
                    booking_id: booking.id,
                    amount,
                    description: Some(format!(
                        "Car {car} rental from {start_date} to {end_date}"
                    )),
                },
            )
            .await?;

        info!("✓ Booking {} created with payment {}", booking.id, payment.id);
        Ok(BookingWithPayment { booking, payment })
    }
}
