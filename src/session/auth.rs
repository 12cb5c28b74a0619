/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/6/26
******************************************************************************/

//! Authentication flows for the rental API
//!
//! This module provides the session object that owns the token pair and
//! handles:
//! - Login against the token endpoint (requires both tokens in the response)
//! - Access-token refresh using the stored refresh token
//! - Best-effort logout with unconditional local clearing
//! - Write-through persistence to a [`TokenStore`] and subscriber
//!   notification on every token change

use crate::config::{Config, Credentials};
use crate::constants::USER_AGENT;
use crate::endpoints;
use crate::error::AuthError;
use crate::session::notifier::TokenNotifier;
use crate::session::store::TokenStore;
use crate::session::tokens::{TokenEvent, TokenPair};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Session object owning the in-memory token pair
///
/// The store is a durable mirror: it is read once at construction and
/// written through on every change. Store failures are logged and never
/// abort the in-memory update, so the session stays usable for the current
/// process lifetime even when durability is lost.
pub struct Auth {
    config: Arc<Config>,
    http: Client,
    tokens: RwLock<TokenPair>,
    store: Arc<dyn TokenStore>,
    notifier: TokenNotifier,
    refresh_gate: Mutex<()>,
}

#[derive(Deserialize)]
struct TokenEndpointResponse {
    access: Option<String>,
    refresh: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

impl Auth {
    /// Creates a new session, loading any persisted tokens from the store
    ///
    /// # Arguments
    /// * `config` - Configuration with credentials and API settings
    /// * `store` - Durable token store read at startup and written through
    pub fn new(config: Arc<Config>, store: Arc<dyn TokenStore>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("reqwest client");

        let tokens = match store.load() {
            Ok(pair) => {
                if pair.is_authenticated() {
                    debug!("loaded persisted token pair");
                }
                pair
            }
            Err(e) => {
                warn!("could not load persisted tokens: {e}");
                TokenPair::default()
            }
        };

        Self {
            config,
            http,
            tokens: RwLock::new(tokens),
            store,
            notifier: TokenNotifier::new(),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Returns the notifier token-change subscribers register with
    pub fn notifier(&self) -> &TokenNotifier {
        &self.notifier
    }

    /// Returns the current access token, if one is held
    pub async fn access_token(&self) -> Option<String> {
        self.tokens.read().await.access.clone()
    }

    /// Returns a snapshot of the current token pair
    pub async fn tokens(&self) -> TokenPair {
        self.tokens.read().await.clone()
    }

    /// Returns true when an access token is held
    pub async fn is_authenticated(&self) -> bool {
        self.tokens.read().await.is_authenticated()
    }

    /// Logs in with the credentials from the configuration
    ///
    /// # Returns
    /// * `Ok(String)` - The new access token
    /// * `Err(AuthError)` - If the login is rejected or the response lacks a token
    pub async fn login(&self) -> Result<String, AuthError> {
        let credentials = self.config.credentials.clone();
        self.login_with(&credentials).await
    }

    /// Logs in with explicit credentials
    ///
    /// The token endpoint must return both an access and a refresh token;
    /// otherwise the call fails and the stored tokens are left untouched.
    ///
    /// # Arguments
    /// * `credentials` - Username and password to present
    ///
    /// # Returns
    /// * `Ok(String)` - The new access token
    /// * `Err(AuthError)` - If the login is rejected or the response lacks a token
    pub async fn login_with(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let url = self.rest_url(endpoints::TOKEN);
        debug!("sending login request to {}", url);

        let body = serde_json::json!({
            "username": credentials.username,
            "password": credentials.password,
        });

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = read_error_detail(response)
                .await
                .unwrap_or_else(|| format!("login failed with status {status}"));
            warn!("login rejected: {detail}");
            return Err(AuthError::BadCredentials(detail));
        }

        let json: TokenEndpointResponse = response.json().await?;
        let (Some(access), Some(refresh)) = (json.access, json.refresh) else {
            warn!("token endpoint did not return both tokens");
            return Err(AuthError::MissingTokens);
        };

        self.set_tokens(TokenPair::new(access.clone(), refresh)).await;
        info!("✓ Login successful");
        Ok(access)
    }

    /// Refreshes the access token using the stored refresh token
    ///
    /// The refresh token itself is kept unless the endpoint includes a
    /// replacement. Concurrent refresh attempts are serialized; a caller
    /// that waited on another task's refresh reuses its result instead of
    /// refreshing again.
    ///
    /// # Returns
    /// * `Ok(String)` - The new access token
    /// * `Err(AuthError)` - If no refresh token is held, the endpoint
    ///   rejects the request, or the response lacks an access token
    pub async fn refresh(&self) -> Result<String, AuthError> {
        let stale_access = self.access_token().await;

        let _guard = self.refresh_gate.lock().await;

        // Another in-flight call may have refreshed while we waited on the gate.
        let current = self.tokens().await;
        if current.access.is_some() && current.access != stale_access {
            debug!("token already refreshed by a concurrent call");
            return Ok(current.access.unwrap_or_default());
        }

        let Some(refresh_token) = current.refresh else {
            warn!("refresh requested but no refresh token is held");
            return Err(AuthError::NoRefreshToken);
        };

        let url = self.rest_url(endpoints::TOKEN_REFRESH);
        debug!("sending token refresh request to {}", url);

        let body = serde_json::json!({ "refresh": refresh_token });

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("token refresh failed with status {status}");
            return Err(AuthError::Rejected(status));
        }

        let json: TokenEndpointResponse = response.json().await?;
        let Some(access) = json.access else {
            warn!("refresh endpoint returned no access token");
            return Err(AuthError::MissingTokens);
        };

        // The backend does not rotate refresh tokens; honor one if it ever does.
        let refresh = json.refresh.unwrap_or(refresh_token);
        self.set_tokens(TokenPair::new(access.clone(), refresh)).await;
        info!("✓ Access token refreshed");
        Ok(access)
    }

    /// Logs out and clears the local token state
    ///
    /// The server-side logout is best effort: a failure is logged and never
    /// surfaced, and the local tokens are cleared regardless.
    pub async fn logout(&self) {
        let refresh_token = self.tokens.read().await.refresh.clone();

        if let Some(refresh) = refresh_token {
            let url = self.rest_url(endpoints::LOGOUT);
            let body = serde_json::json!({ "refresh": refresh });
            let result = self
                .http
                .post(&url)
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await;
            match result {
                Ok(response) if response.status().is_success() => {
                    debug!("server-side logout acknowledged");
                }
                Ok(response) => {
                    warn!(
                        "logout request failed with status {}, clearing tokens locally",
                        response.status()
                    );
                }
                Err(e) => {
                    warn!("logout request failed ({e}), clearing tokens locally");
                }
            }
        }

        self.clear_tokens().await;
        info!("✓ Logged out");
    }

    /// Replaces the token pair, persists it and notifies subscribers
    async fn set_tokens(&self, pair: TokenPair) {
        {
            let mut tokens = self.tokens.write().await;
            *tokens = pair.clone();
        }
        if let Err(e) = self.store.save(&pair) {
            warn!("could not persist tokens, session stays in memory only: {e}");
        }
        self.notifier.dispatch(&TokenEvent::from(&pair));
    }

    /// Drops the token pair, clears the store and notifies subscribers
    async fn clear_tokens(&self) {
        let pair = TokenPair::default();
        {
            let mut tokens = self.tokens.write().await;
            *tokens = pair.clone();
        }
        if let Err(e) = self.store.clear() {
            warn!("could not clear persisted tokens: {e}");
        }
        self.notifier.dispatch(&TokenEvent::from(&pair));
    }

    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Extracts the server-provided detail message from an error response body
async fn read_error_detail(response: reqwest::Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    body.detail.or(body.message)
}
