//! Path templates for the rental backend REST endpoints
//!
//! All paths are relative to the configured base URL and keep the trailing
//! slash the backend routing expects.

/// Obtain an access/refresh token pair from credentials
pub const TOKEN: &str = "/auth/token/";
/// Exchange a refresh token for a new access token
pub const TOKEN_REFRESH: &str = "/auth/token/refresh/";
/// Invalidate a refresh token server side
pub const LOGOUT: &str = "/auth/logout/";
/// Profile of the currently authenticated user
pub const USER_ME: &str = "/main/users/me/";
/// Car collection: list and create
pub const CARS: &str = "/main/cars/";
/// Car search with query parameters
pub const CARS_SEARCH: &str = "/main/cars/search/";
/// Booking collection: list and create
pub const BOOKINGS: &str = "/main/bookings/";
/// Create a payment for a booking
pub const PAYMENTS_CREATE: &str = "/payments/create/";

/// Returns the detail path for a single car
#[must_use]
pub fn car_detail(id: u64) -> String {
    format!("/main/cars/{id}/")
}

/// Returns the detail path for a single booking
#[must_use]
pub fn booking_detail(id: u64) -> String {
    format!("/main/bookings/{id}/")
}

/// Returns the status-check path for a payment
#[must_use]
pub fn payment_check(payment_id: &str) -> String {
    format!("/payments/check/{payment_id}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_paths_keep_trailing_slash() {
        assert_eq!(car_detail(7), "/main/cars/7/");
        assert_eq!(booking_detail(42), "/main/bookings/42/");
        assert_eq!(payment_check("pay_123"), "/payments/check/pay_123/");
    }
}
