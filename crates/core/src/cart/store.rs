//! The cart store: the single owned, injectable cart handle.
//!
//! One store instance lives for the whole session and every consumer (product
//! views, the cart sidebar, checkout) goes through its public operations; no
//! one mutates lines directly. Every successful mutation synchronously
//! persists the full cart through the injected [`CartStorage`] and then runs
//! the registered change listeners in registration order.
//!
//! Visibility (the open/closed sidebar flag) is ephemeral UI state: `add_item`
//! forces it open, `toggle_visibility` flips it, nothing else touches it and
//! it is never persisted.

use super::storage::CartStorage;
use super::{Cart, ProductRef, Variant};
use crate::types::ProductId;

/// A cart change listener, invoked synchronously after each mutation.
pub type Listener = Box<dyn FnMut(&Cart)>;

/// Owner of the in-session cart.
///
/// Single-threaded by design: all mutations happen on the UI thread in
/// response to discrete user actions, so no locking is involved.
pub struct CartStore {
    cart: Cart,
    is_open: bool,
    storage: Box<dyn CartStorage>,
    listeners: Vec<Listener>,
}

impl CartStore {
    /// Open the store, restoring any previously persisted cart.
    ///
    /// Restore never fails the application: a missing, unreadable, or
    /// malformed persisted record silently yields an empty cart.
    pub fn open<S: CartStorage + 'static>(storage: S) -> Self {
        let storage: Box<dyn CartStorage> = Box::new(storage);
        let cart = match storage.load() {
            Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_else(|e| {
                tracing::warn!("discarding unparseable persisted cart: {e}");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("failed to load persisted cart: {e}");
                Cart::new()
            }
        };

        Self {
            cart,
            is_open: false,
            storage,
            listeners: Vec::new(),
        }
    }

    /// The current cart contents.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the cart display is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.cart.count()
    }

    /// Register a change listener.
    ///
    /// Listeners run synchronously after every successful mutation, in
    /// registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add one unit of a product+variant and open the cart display.
    pub fn add_item(&mut self, item: ProductRef, variant: Variant) {
        self.cart.add(item, variant);
        self.is_open = true;
        self.after_mutation();
    }

    /// Remove every line with the given product id, regardless of variant.
    ///
    /// No-op for an unknown id; does not change visibility.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
        self.after_mutation();
    }

    /// Empty the cart (used after a completed order). Visibility unchanged.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.after_mutation();
    }

    /// Flip the open/closed display flag. Cart contents unchanged.
    pub const fn toggle_visibility(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Persist the cart best-effort, then notify listeners.
    ///
    /// A storage failure must not block the in-memory mutation, so it is only
    /// logged here.
    fn after_mutation(&mut self) {
        match serde_json::to_string(&self.cart) {
            Ok(payload) => {
                if let Err(e) = self.storage.save(&payload) {
                    tracing::warn!("failed to persist cart: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize cart: {e}"),
        }
        self.notify();
    }

    fn notify(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener(&self.cart);
        }
        self.listeners = listeners;
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("is_open", &self.is_open)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
