//! File-backed cart storage.
//!
//! The device-local-storage analog: the cart lives in a single JSON file
//! (`cart.json`) inside the data directory, surviving runs the way browser
//! local storage survives reloads. Two concurrent processes can diverge until
//! one overwrites the file; there is no cross-process consistency guarantee.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use torres_core::cart::{CartStorage, StorageError};

/// The cart payload file name inside the data directory.
const CART_FILE: &str = "cart.json";

/// Cart storage over a JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CART_FILE),
        }
    }

    /// The file the cart is persisted to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
