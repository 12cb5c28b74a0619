use crate::error::AppError;
use crate::model::car::{Car, CarSearchQuery, NewCar};
use async_trait::async_trait;

/// Interface for the car service
#[async_trait]
pub trait CarService: Send + Sync {
    /// Lists all cars
    async fn list_cars(&self) -> Result<Vec<Car>, AppError>;

    /// Gets a single car by its identifier
    async fn get_car(&self, id: u64) -> Result<Car, AppError>;

    /// Creates a car
    async fn create_car(&self, car: &NewCar) -> Result<Car, AppError>;

    /// Replaces a car
    async fn update_car(&self, id: u64, car: &NewCar) -> Result<Car, AppError>;

    /// Deletes a car
    async fn delete_car(&self, id: u64) -> Result<(), AppError>;

    /// Searches cars matching the given filters
    async fn search_cars(&self, query: &CarSearchQuery) -> Result<Vec<Car>, AppError>;
}
