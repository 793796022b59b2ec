//! Command implementations.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;

use std::path::PathBuf;

use torres_core::CartStore;

use crate::api::ApiClient;
use crate::session::SessionStore;
use crate::storage::FileStorage;

/// Shared command context: backend client plus the device-local data dir.
pub struct Context {
    pub api: ApiClient,
    pub data_dir: PathBuf,
}

impl Context {
    #[must_use]
    pub fn new(api_url: &str, data_dir: PathBuf) -> Self {
        Self {
            api: ApiClient::new(api_url),
            data_dir,
        }
    }

    /// Open the cart store over the local cart file.
    #[must_use]
    pub fn open_cart_store(&self) -> CartStore {
        CartStore::open(FileStorage::new(&self.data_dir))
    }

    /// The local session marker store.
    #[must_use]
    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(&self.data_dir)
    }
}
