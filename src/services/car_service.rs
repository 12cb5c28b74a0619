use crate::client::RentalClient;
use crate::endpoints;
use crate::error::AppError;
use crate::model::car::{Car, CarSearchQuery, NewCar};
use crate::services::interfaces::car::CarService;
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;
use tracing::debug;

/// Car service backed by the request gateway
pub struct CarServiceImpl {
    client: Arc<RentalClient>,
}

impl CarServiceImpl {
    /// Creates a new car service
    ///
    /// # Arguments
    /// * `client` - Shared gateway the requests are issued through
    pub fn new(client: Arc<RentalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CarService for CarServiceImpl {
    async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        self.client.get(endpoints::CARS).await
    }

    async fn get_car(&self, id: u64) -> Result<Car, AppError> {
        self.client.get(&endpoints::car_detail(id)).await
    }

    async fn create_car(&self, car: &NewCar) -> Result<Car, AppError> {
        self.client.post(endpoints::CARS, car).await
    }

    async fn update_car(&self, id: u64, car: &NewCar) -> Result<Car, AppError> {
        self.client.put(&endpoints::car_detail(id), car).await
    }

    async fn delete_car(&self, id: u64) -> Result<(), AppError> {
        self.client.delete(&endpoints::car_detail(id)).await
    }

    async fn search_cars(&self, query: &CarSearchQuery) -> Result<Vec<Car>, AppError> {
        let base = format!(
            "{}/{}",
            self.client.base_url().trim_end_matches('/'),
            endpoints::CARS_SEARCH.trim_start_matches('/')
        );
        let url = Url::parse_with_params(&base, query.to_params())
            .map_err(|e| AppError::InvalidInput(format!("invalid search query: {e}")))?;
        debug!("searching cars: {}", url);
        self.client.get(url.as_str()).await
    }
}
