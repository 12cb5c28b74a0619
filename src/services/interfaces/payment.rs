use crate::error::AppError;
use crate::model::payment::{NewPayment, Payment};
use async_trait::async_trait;

/// Interface for the payment service
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Initiates a payment for a booking
    async fn create_payment(&self, payment: &NewPayment) -> Result<Payment, AppError>;

    /// Polls the current status of a payment
    async fn check_payment(&self, payment_id: &str) -> Result<Payment, AppError>;
}
