/// Module containing booking models
pub mod booking;
/// Module containing car models
pub mod car;
/// Module containing payment models
pub mod payment;
/// Module containing user models
pub mod user;

pub use booking::*;
pub use car::*;
pub use payment::*;
pub use user::*;
