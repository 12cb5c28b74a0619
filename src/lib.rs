/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/6/26
******************************************************************************/

//! # Rental Client
//!
//! Rust client for a car-rental REST backend. The crate covers JWT
//! authentication (access/refresh token pair with transparent refresh and
//! retry on 401), durable token storage, token-change notifications, and the
//! car, booking and payment endpoints of the API.
//!
//! ## Quick start
//!
//! ```ignore
//! use rental_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(RentalClient::new(config)?);
//!
//! client.auth().login().await?;
//!
//! let cars = CarServiceImpl::new(client.clone());
//! let available = cars.list_cars().await?;
//! ```
//!
//! Authentication is handled by [`session::auth::Auth`]: once a login has
//! succeeded, every request carries the bearer token and an expired access
//! token is refreshed and the request retried exactly once, without the
//! caller noticing.

/// Client for making authenticated requests against the rental API
pub mod client;
/// Configuration loaded from environment variables
pub mod config;
/// Global constants
pub mod constants;
/// Path templates for the REST endpoints
pub mod endpoints;
/// Error types for the library
pub mod error;
/// Domain models for cars, bookings, payments and users
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Session management: tokens, persistence, notifications, auth flows
pub mod session;
/// Service interfaces and implementations for the API resources
pub mod services;
/// Utility modules
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
