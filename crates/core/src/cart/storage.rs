//! Storage backend contract for cart persistence.
//!
//! The store persists the serialized cart through this trait and treats every
//! failure as best-effort: a failed save is logged by the store and never
//! blocks the in-memory mutation.

use thiserror::Error;

/// Error from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Device-local persistence for the cart payload.
///
/// Implementations hold one payload slot, the equivalent of a single `cart`
/// key in browser local storage.
pub trait CartStorage {
    /// Load the persisted payload, `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the persisted payload.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn save(&mut self, payload: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    /// Empty storage (nothing persisted yet).
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Storage pre-seeded with a payload, as if restored from a prior session.
    #[must_use]
    pub const fn with_payload(payload: String) -> Self {
        Self {
            slot: Some(payload),
        }
    }

    /// The currently persisted payload.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), StorageError> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}
