//! The shopping cart: line identity, derived totals, and ordering rules.
//!
//! # Line identity
//!
//! Two operations refer to the same line iff `(product_id, size, color)` all
//! match exactly. An absent variant attribute is distinct from any present
//! value, so the same product in size 38 and size 39 occupies two lines, while
//! adding the same product+variant twice collapses into one line with its
//! quantity incremented.
//!
//! # Persistence shape
//!
//! A cart serializes as a JSON array of
//! `{id, name, price, quantity, imageUrl?, size?, color?}` records. Readers
//! tolerate records that predate variants (missing `size`/`color`).

mod storage;
mod store;

pub use storage::{CartStorage, MemoryStorage, StorageError};
pub use store::CartStore;

use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// One distinct product+variant entry in the cart, with its own quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Product name, snapshotted at add time (never re-fetched).
    pub name: String,
    /// Unit price, snapshotted at add time.
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CartLine {
    /// The identity tuple deciding whether two adds target the same line.
    fn identity(&self) -> (ProductId, Option<&str>, Option<&str>) {
        (self.product_id, self.size.as_deref(), self.color.as_deref())
    }

    /// Line subtotal (`unit_price * quantity`).
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// The product fields the cart snapshots when a line is added.
///
/// The calling view resolves a full catalog [`Product`] (or equivalent) down
/// to this shape; the cart never queries the catalog itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRef {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price_new,
            image_url: product.image_url.clone(),
        }
    }
}

/// A size/color selection distinguishing otherwise-identical products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variant {
    pub size: Option<String>,
    pub color: Option<String>,
}

impl Variant {
    /// The no-variant selection.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            size: None,
            color: None,
        }
    }
}

/// An ordered collection of cart lines, insertion-order preserved, with no
/// duplicate identity tuples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order of first-added identity.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of the given product+variant.
    ///
    /// Increments the quantity of the existing line with the same identity
    /// tuple, or appends a new line with quantity 1.
    pub fn add(&mut self, item: ProductRef, variant: Variant) {
        let identity = (item.id, variant.size.as_deref(), variant.color.as_deref());
        if let Some(line) = self.lines.iter_mut().find(|l| l.identity() == identity) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            product_id: item.id,
            name: item.name,
            unit_price: item.price,
            quantity: 1,
            image_url: item.image_url,
            size: variant.size,
            color: variant.color,
        });
    }

    /// Remove every line with the given product id, regardless of variant.
    ///
    /// A user with two variants of the same product cannot remove just one;
    /// removal is keyed on product id only. No-op for an unknown id.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    ///
    /// Full f64 precision; rounding happens only at display time.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of all line quantities (badge/indicator count).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn item(id: i32, name: &str, price: f64) -> ProductRef {
        ProductRef {
            id: ProductId::new(id),
            name: name.to_string(),
            price,
            image_url: None,
        }
    }

    fn sized(size: &str) -> Variant {
        Variant {
            size: Some(size.to_string()),
            color: None,
        }
    }

    #[test]
    fn test_add_distinct_products() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), Variant::none());
        cart.add(item(2, "B", 20.0), Variant::none());

        assert_eq!(cart.lines().len(), 2);
        assert!(cart.lines().iter().all(|l| l.quantity == 1));
        assert_eq!(cart.total(), 30.0);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_same_identity_increments() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), Variant::none());
        cart.add(item(1, "A", 10.0), Variant::none());

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_variants_are_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), sized("38"));
        cart.add(item(1, "A", 10.0), sized("39"));

        assert_eq!(cart.lines().len(), 2);
        assert!(cart.lines().iter().all(|l| l.quantity == 1));
        assert_eq!(cart.total(), 20.0);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_absent_variant_is_distinct_from_present() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), Variant::none());
        cart.add(item(1, "A", 10.0), sized("38"));

        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_identity_includes_color() {
        let mut cart = Cart::new();
        let negro = Variant {
            size: Some("38".to_string()),
            color: Some("Negro".to_string()),
        };
        let rojo = Variant {
            size: Some("38".to_string()),
            color: Some("Rojo".to_string()),
        };
        cart.add(item(1, "A", 10.0), negro.clone());
        cart.add(item(1, "A", 10.0), rojo);
        cart.add(item(1, "A", 10.0), negro);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(item(3, "C", 1.0), Variant::none());
        cart.add(item(1, "A", 1.0), Variant::none());
        cart.add(item(2, "B", 1.0), Variant::none());
        cart.add(item(3, "C", 1.0), Variant::none());

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product_id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_drops_all_variants() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), sized("38"));
        cart.add(item(1, "A", 10.0), sized("39"));
        cart.add(item(2, "B", 5.0), Variant::none());

        cart.remove(ProductId::new(1));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, ProductId::new(2));
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total(), 5.0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), Variant::none());

        cart.remove(ProductId::new(99));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), 10.0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), Variant::none());
        cart.add(item(2, "B", 20.0), sized("40"));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_total_tracks_adds() {
        let mut cart = Cart::new();
        let before = cart.total();
        cart.add(item(1, "A", 77.94), Variant::none());
        assert_eq!(cart.total(), before + 77.94);
    }

    #[test]
    fn test_variant_identity_scenario() {
        // add {id:1, name:"A", price:10} twice -> one line, qty 2, total 20
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), Variant::none());
        cart.add(item(1, "A", 10.0), Variant::none());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 20.0);

        // size 38 then 39 -> two distinct lines, qty 1 each
        let mut cart = Cart::new();
        cart.add(item(1, "A", 10.0), sized("38"));
        cart.add(item(1, "A", 10.0), sized("39"));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total(), 20.0);
        assert_eq!(cart.count(), 2);

        // removeItem(1) -> cart empty, total 0
        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_serde_roundtrip_preserves_order() {
        let mut cart = Cart::new();
        cart.add(item(2, "B", 20.0), sized("40"));
        cart.add(item(1, "A", 10.0), Variant::none());
        cart.add(item(2, "B", 20.0), sized("40"));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_wire_shape() {
        let mut cart = Cart::new();
        cart.add(
            ProductRef {
                id: ProductId::new(1),
                name: "Zapatillas".to_string(),
                price: 77.94,
                image_url: Some("https://cdn.example/1.jpg".to_string()),
            },
            sized("38"),
        );

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["price"], 77.94);
        assert_eq!(json[0]["imageUrl"], "https://cdn.example/1.jpg");
        assert_eq!(json[0]["size"], "38");
        // color never selected: omitted, not null
        assert!(json[0].get("color").is_none());
    }

    #[test]
    fn test_loads_records_without_variant_fields() {
        // Older persisted records predate size/color and imageUrl.
        let json = r#"[{"id":1,"name":"A","price":10.5,"quantity":3}]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].size, None);
        assert_eq!(cart.lines()[0].color, None);
        assert_eq!(cart.lines()[0].image_url, None);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), 31.5);
    }
}
