/// Module containing the authentication flows (login, refresh, logout)
pub mod auth;
/// Module containing the token-change notifier
pub mod notifier;
/// Module containing durable token storage
pub mod store;
/// Module containing the token pair model
pub mod tokens;

pub use auth::*;
pub use notifier::*;
pub use store::*;
pub use tokens::*;
