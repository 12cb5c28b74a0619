/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/6/26
******************************************************************************/

//! Error types for the rental client
//!
//! Two layers of errors exist: [`AuthError`] for the session layer (login,
//! refresh, logout) and [`AppError`] for everything the request gateway and
//! the services surface to callers. Refresh failures inside the transparent
//! retry path are reported uniformly as [`AppError::Unauthorized`].

use reqwest::StatusCode;
use std::fmt;

/// Main error type for gateway and service operations
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure before a response was obtained
    Network(reqwest::Error),
    /// Non-2xx response outside the handled 401-refresh path
    Http {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Server-provided `detail` message, or a generic one derived from the status
        detail: String,
    },
    /// Token refresh was unavailable or rejected while retrying a 401
    Unauthorized,
    /// A 2xx response body could not be decoded into the expected type
    Deserialization(String),
    /// JSON serialization failure
    Json(serde_json::Error),
    /// Filesystem failure in the token store
    Io(std::io::Error),
    /// Caller-supplied input was rejected before any request was made
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Http { status, detail } => write!(f, "http {status}: {detail}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Deserialization(e.to_string())
        } else {
            AppError::Network(e)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

/// Error type for the session layer
#[derive(Debug)]
pub enum AuthError {
    /// A refresh was requested but no refresh token is held
    NoRefreshToken,
    /// The token endpoint response lacked the access or refresh token field
    MissingTokens,
    /// Login was rejected; carries the server detail message when available
    BadCredentials(String),
    /// Token refresh was rejected with a non-2xx status
    Rejected(StatusCode),
    /// Transport-level failure talking to the auth endpoints
    Network(reqwest::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoRefreshToken => write!(f, "no refresh token available"),
            AuthError::MissingTokens => {
                write!(f, "token response missing access or refresh token")
            }
            AuthError::BadCredentials(detail) => write!(f, "login rejected: {detail}"),
            AuthError::Rejected(status) => {
                write!(f, "token refresh rejected with status {status}")
            }
            AuthError::Network(e) => write!(f, "network error: {e}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Network(e)
    }
}
