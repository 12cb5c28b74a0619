/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/6/26
******************************************************************************/

//! Durable token storage
//!
//! The store is a passive mirror of the in-memory token pair: the session
//! writes through on every change and reads once at construction. Losing the
//! store never invalidates the session, it only costs durability across
//! restarts.

use crate::error::AppError;
use crate::session::tokens::TokenPair;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Persistence interface for the access/refresh token pair
pub trait TokenStore: Send + Sync {
    /// Loads the stored pair; a store that was never written loads as empty
    fn load(&self) -> Result<TokenPair, AppError>;

    /// Persists the pair, replacing whatever was stored before
    fn save(&self, tokens: &TokenPair) -> Result<(), AppError>;

    /// Removes the stored pair; clearing an empty store is not an error
    fn clear(&self) -> Result<(), AppError>;
}

/// File-backed token store
///
/// The pair is kept as a small JSON object under the fixed keys
/// `access_token` and `refresh_token`, readable across process restarts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store persisting to the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path the store persists to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<TokenPair, AppError> {
        if !self.path.exists() {
            debug!("token file {} not found, starting empty", self.path.display());
            return Ok(TokenPair::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let pair = serde_json::from_str(&raw)?;
        Ok(pair)
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(tokens)?;
        fs::write(&self.path, raw)?;
        debug!("token pair persisted to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests and sessions that should not persist
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<TokenPair>,
}

impl MemoryTokenStore {
    /// Creates an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<TokenPair, AppError> {
        Ok(self.inner.lock().expect("token store lock").clone())
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), AppError> {
        *self.inner.lock().expect("token store lock") = tokens.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.inner.lock().expect("token store lock") = TokenPair::default();
        Ok(())
    }
}
