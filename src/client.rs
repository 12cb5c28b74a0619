/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/6/26
******************************************************************************/

//! Authenticated request gateway for the rental API
//!
//! This module provides a client that handles:
//! - Bearer-token injection on every request while a session is held
//! - Transparent access-token refresh and a single retry on 401
//! - Uniform error classification (network, HTTP, auth)
//!
//! # Example
//! ```ignore
//! use rental_client::client::RentalClient;
//! use rental_client::config::Config;
//!
//! let client = RentalClient::new(Config::new())?;
//! client.auth().login().await?;
//!
//! // Requests carry the bearer token and survive one expired access token
//! let bookings: Vec<Booking> = client.get("/main/bookings/").await?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::endpoints;
use crate::error::AppError;
use crate::model::user::User;
use crate::session::auth::Auth;
use crate::session::store::{FileTokenStore, TokenStore};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry lifecycle of one logical call through the gateway
///
/// A call starts in `Initial` and moves to `Refreshing` only on a 401.
/// A successful refresh moves it to `Retried` and the call is re-issued
/// once; anything else ends in `Failed`. A 401 received in `Retried` is
/// not refreshed again, so a call never triggers more than one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryState {
    Initial,
    Refreshing,
    Retried,
    Failed,
}

/// Client for the rental API with automatic authentication
///
/// Owns the session object and a shared HTTP client. All resource services
/// issue their calls through this gateway.
pub struct RentalClient {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl RentalClient {
    /// Creates a new client with a file-backed token store
    ///
    /// Tokens persisted by an earlier run are loaded immediately, so a
    /// client can resume an authenticated session without logging in again.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(RentalClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be constructed
    pub fn new(config: Config) -> Result<Self, AppError> {
        let store = Arc::new(FileTokenStore::new(config.storage.token_file.clone()));
        Self::with_store(config, store)
    }

    /// Creates a new client with a caller-supplied token store
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `store` - Token store read at startup and written through on changes
    pub fn with_store(config: Config, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone(), store));

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Gets a reference to the session object
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Returns the configured base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Makes a GET request
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/main/cars/")
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - If the request fails
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request
    ///
    /// A 204 response is the expected success shape; its empty body is never
    /// parsed. Other 2xx responses also count as success.
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.execute(Method::DELETE, path, &None::<()>).await?;
        if response.status() == StatusCode::NO_CONTENT {
            debug!("delete returned 204, skipping body parse");
        }
        Ok(())
    }

    /// Makes a request and deserializes the response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API endpoint path, or an absolute `http…` URL
    /// * `body` - Optional request body
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - If the request fails
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let response = self.execute(method, path, &body).await?;
        Ok(response.json().await?)
    }

    /// Gets the profile of the currently authenticated user
    ///
    /// # Returns
    /// * `Ok(None)` - When no session is held; no request is issued
    /// * `Ok(Some(User))` - The authenticated user's profile
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        if !self.auth.is_authenticated().await {
            return Ok(None);
        }
        let user = self.get(endpoints::USER_ME).await?;
        Ok(Some(user))
    }

    /// Issues the HTTP call, driving the refresh-and-retry state machine
    ///
    /// Returns the successful response; every failure path has already been
    /// classified into an [`AppError`] by the time this returns.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let url = self.resolve_url(path);
        let mut state = RetryState::Initial;

        loop {
            debug!("{} {}", method, url);

            let mut request = self
                .http_client
                .request(method.clone(), &url)
                .header("Content-Type", "application/json; charset=UTF-8")
                .header("Accept", "application/json; charset=UTF-8");

            if let Some(access) = self.auth.access_token().await {
                request = request.header("Authorization", format!("Bearer {access}"));
            }

            if let Some(b) = body {
                request = request.json(b);
            }

            let response = request.send().await?;
            let status = response.status();
            debug!("response status: {}", status);

            if status.is_success() {
                return Ok(response);
            }

            if status == StatusCode::UNAUTHORIZED && state == RetryState::Initial {
                state = RetryState::Refreshing;
                debug!("received 401, retry state {state:?}");

                state = match self.auth.refresh().await {
                    Ok(_) => RetryState::Retried,
                    Err(e) => {
                        warn!("token refresh failed: {e}");
                        RetryState::Failed
                    }
                };

                if state == RetryState::Failed {
                    // Tokens are left in place; clearing them is the caller's call.
                    return Err(AppError::Unauthorized);
                }
                continue;
            }

            return Err(error_from_response(response).await);
        }
    }

    /// Joins a relative path to the base URL; absolute URLs pass through
    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }
}

/// Builds the error for a non-2xx response outside the refresh path
///
/// Uses the decoded body's `detail` field when present, otherwise a generic
/// message derived from the status code.
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(|d| d.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"));
    AppError::Http { status, detail }
}
