//! Catalog access for the storefront.
//!
//! Real product persistence is delegated to an external managed backend; this
//! process only ever serves the seeded in-memory catalog. The trait exists so
//! handlers and tests depend on the interface, not the backing store.

pub mod memory;

pub use memory::InMemoryProductRepository;

use thiserror::Error;
use torres_core::{Product, ProductCriteria, ProductId};

/// Error from a catalog repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The repository's internal state is no longer usable.
    #[error("repository poisoned: {0}")]
    Poisoned(String),
}

/// Read/write access to the product catalog.
pub trait ProductRepository: Send + Sync {
    /// List products matching the criteria, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backing store cannot be read.
    fn find_all(&self, criteria: &ProductCriteria) -> Result<Vec<Product>, RepositoryError>;

    /// Look up a single product.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backing store cannot be read.
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backing store cannot be written.
    fn save(&self, product: Product) -> Result<Product, RepositoryError>;
}
