//! Torres Core - Shared domain library for Comercial Torres.
//!
//! This crate provides the types used across both binaries:
//! - `storefront` - Thin HTTP backend serving the catalog and analytics events
//! - `cli` - Client application (cart, browsing, checkout)
//!
//! # Architecture
//!
//! The core crate contains only types and the cart state machine - no file I/O,
//! no HTTP clients. Storage backends implement the [`cart::CartStorage`] trait
//! from the outside; the only implementation shipped here is an in-memory one.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, catalog products, price formatting
//! - [`cart`] - The cart store: line identity, derived totals, persistence
//!   contract, and the change-listener mechanism

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine, CartStorage, CartStore, MemoryStorage, ProductRef, Variant};
pub use types::*;
