use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A car as returned by the rental backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    /// Unique identifier of the car
    pub id: u64,
    /// Manufacturer name
    pub brand: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// Rental price per day
    pub price_per_day: f64,
    /// Number of seats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    /// Whether the car can currently be booked
    #[serde(default)]
    pub available: bool,
    /// Free-form description shown in listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating or replacing a car
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCar {
    /// Manufacturer name
    pub brand: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// Rental price per day
    pub price_per_day: f64,
    /// Number of seats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    /// Whether the car can currently be booked
    #[serde(default)]
    pub available: bool,
    /// Free-form description shown in listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters for the car search endpoint
///
/// Every field is optional; unset fields are omitted from the query string.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CarSearchQuery {
    /// Manufacturer name to match
    pub brand: Option<String>,
    /// Model name to match
    pub model: Option<String>,
    /// Lower bound on the daily price
    pub min_price: Option<f64>,
    /// Upper bound on the daily price
    pub max_price: Option<f64>,
    /// Minimum number of seats
    pub seats: Option<u32>,
}

impl CarSearchQuery {
    /// Creates an empty query matching all cars
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set filters as query parameter pairs
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(brand) = &self.brand {
            params.push(("brand", brand.clone()));
        }
        if let Some(model) = &self.model {
            params.push(("model", model.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("max_price", max_price.to_string()));
        }
        if let Some(seats) = self.seats {
            params.push(("seats", seats.to_string()));
        }
        params
    }
}
