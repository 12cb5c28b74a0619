/// Module containing the booking service implementation
pub mod booking_service;
/// Module containing the car service implementation
pub mod car_service;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the payment service implementation
pub mod payment_service;
/// Module containing common types used by services
mod types;

pub use booking_service::*;
pub use car_service::*;
pub use interfaces::booking::*;
pub use interfaces::car::*;
pub use interfaces::payment::*;
pub use payment_service::*;
pub use types::*;
