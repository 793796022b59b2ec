//! Local sign-in marker.
//!
//! Real authentication is delegated to an external identity provider; the
//! client only needs the "is a user present" answer that checkout consults.
//! The marker is a small JSON file next to the cart.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The session marker file name inside the data directory.
const SESSION_FILE: &str = "session.json";

/// Error reading or writing the session marker.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed session file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The signed-in user marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Session marker stored in the data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// The current session, `None` if signed out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the marker exists but cannot be read or
    /// parsed.
    pub fn current(&self) -> Result<Option<Session>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Sign in as the given email.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the marker cannot be written.
    pub fn sign_in(&self, email: &str) -> Result<Session, SessionError> {
        let session = Session {
            email: email.to_string(),
            logged_in_at: Utc::now(),
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&session)?)?;
        Ok(session)
    }

    /// Remove the session marker. No-op if already signed out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the marker exists but cannot be removed.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
