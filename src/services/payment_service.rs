use crate::client::RentalClient;
use crate::endpoints;
use crate::error::AppError;
use crate::model::payment::{NewPayment, Payment};
use crate::services::interfaces::payment::PaymentService;
use async_trait::async_trait;
use std::sync::Arc;

/// Payment service backed by the request gateway
pub struct PaymentServiceImpl {
    client: Arc<RentalClient>,
}

impl PaymentServiceImpl {
    /// Creates a new payment service
    ///
    /// # Arguments
    /// * `client` - Shared gateway the requests are issued through
    pub fn new(client: Arc<RentalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    async fn create_payment(&self, payment: &NewPayment) -> Result<Payment, AppError> {
        self.client.post(endpoints::PAYMENTS_CREATE, payment).await
    }

    async fn check_payment(&self, payment_id: &str) -> Result<Payment, AppError> {
        self.client.get(&endpoints::payment_check(payment_id)).await
    }
}
