//! Shared type definitions.
//!
//! - [`id`] - Newtype ID wrappers (via the `define_id!` macro)
//! - [`product`] - Catalog product model and query criteria
//! - [`price`] - Display formatting for prices

pub mod id;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use price::format_price;
pub use product::{Badge, BadgeKind, Category, Product, ProductCriteria, UnknownCategory};
