/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/6/26
******************************************************************************/

//! Configuration for the rental API client
//!
//! Values are read from environment variables (a `.env` file is honored)
//! with sensible defaults for local development against a backend on
//! `127.0.0.1:8000`.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_FILE};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Authentication credentials for the rental API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Credentials {
    /// Username of the rental account
    pub username: String,
    /// Password of the rental account
    pub password: String,
}

/// Configuration for the REST API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct RestApiConfig {
    /// Base URL for the rental REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

/// Configuration for durable token storage
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the JSON file the token pair is persisted to
    pub token_file: String,
}

/// Main configuration for the rental API client
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Token storage configuration
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("RENTAL_USERNAME", String::from("default_username"));
        let password = get_env_or_default("RENTAL_PASSWORD", String::from("default_password"));
        let base_url = get_env_or_default("RENTAL_BASE_URL", String::from(DEFAULT_BASE_URL));
        let timeout = get_env_or_default("RENTAL_TIMEOUT", DEFAULT_TIMEOUT_SECS);
        let token_file = get_env_or_default("RENTAL_TOKEN_FILE", String::from(DEFAULT_TOKEN_FILE));

        // Check if we are using default values
        if username == "default_username" {
            error!("RENTAL_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("RENTAL_PASSWORD not found in environment variables or .env file");
        }

        Self {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig { base_url, timeout },
            storage: StorageConfig { token_file },
        }
    }

    /// Creates a configuration pointing at the given base URL
    ///
    /// Credentials and storage keep their defaults; mainly useful in tests
    /// and examples that talk to a local or mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.rest_api.base_url = base_url.into();
        config
    }
}
