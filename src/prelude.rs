/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/6/26
******************************************************************************/

//! # Rental Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the rental client library.
//!
//! ## Usage
//!
//! ```rust
//! use rental_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the rental API client
pub use crate::config::{Config, Credentials, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types for the library
pub use crate::error::{AppError, AuthError};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Session object owning the token pair
pub use crate::session::auth::Auth;

/// Token-change notifier
pub use crate::session::notifier::{SubscriptionId, TokenNotifier};

/// Durable token storage
pub use crate::session::store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Token pair model and change events
pub use crate::session::tokens::{TokenEvent, TokenPair};

// ============================================================================
// GATEWAY
// ============================================================================

/// Authenticated request gateway
pub use crate::client::RentalClient;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Booking service trait
pub use crate::services::interfaces::booking::BookingService;

/// Car service trait
pub use crate::services::interfaces::car::CarService;

/// Payment service trait
pub use crate::services::interfaces::payment::PaymentService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Booking service implementation
pub use crate::services::booking_service::BookingServiceImpl;

/// Car service implementation
pub use crate::services::car_service::CarServiceImpl;

/// Payment service implementation
pub use crate::services::payment_service::PaymentServiceImpl;

/// Common service types
pub use crate::services::BookingWithPayment;

// ============================================================================
// MODELS
// ============================================================================

/// Booking models
pub use crate::model::booking::{Booking, BookingStatus, NewBooking};

/// Car models
pub use crate::model::car::{Car, CarSearchQuery, NewCar};

/// Payment models
pub use crate::model::payment::{NewPayment, Payment, PaymentStatus};

/// User models
pub use crate::model::user::User;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, NaiveDate, Utc};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
