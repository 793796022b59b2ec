//! Cart commands.
//!
//! The add path mirrors the product views: the product is resolved against
//! the catalog first and snapshotted into the cart line; the cart itself
//! never talks to the backend.

use torres_core::{CartLine, ProductId, ProductRef, Variant, format_price};

use super::Context;
use crate::analytics;

/// Print the cart contents with the derived total and count.
pub fn show(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = ctx.open_cart_store();

    if store.cart().is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for line in store.cart().lines() {
        println!("{}", cart_line_row(line));
    }
    println!("----");
    println!("{} item(s), total {}", store.count(), format_price(store.total()));

    Ok(())
}

/// Add one unit of a product, with an optional size/color selection.
pub async fn add(
    ctx: &Context,
    id: i32,
    size: Option<String>,
    color: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let product_id = ProductId::new(id);
    let Some(product) = ctx.api.get_product(product_id).await? else {
        return Err(format!("Product {id} not found").into());
    };

    let mut store = ctx.open_cart_store();
    // The badge a storefront would render after the cart changes.
    store.subscribe(|cart| println!("Cart: {} item(s)", cart.count()));

    store.add_item(ProductRef::from(&product), Variant { size, color });
    println!("Added {} to cart.", product.name);
    if store.is_open() {
        println!("Cart opened.");
    }

    let session = ctx.session_store().current().unwrap_or(None);
    analytics::track(&ctx.api, session.as_ref(), "add_to_cart", Some(product_id), None).await;

    Ok(())
}

/// Remove every line of a product, regardless of variant.
pub fn remove(ctx: &Context, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ctx.open_cart_store();
    store.subscribe(|cart| println!("Cart: {} item(s)", cart.count()));

    store.remove_item(ProductId::new(id));
    println!("Removed product {id} from cart.");

    Ok(())
}

/// Empty the cart.
pub fn clear(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ctx.open_cart_store();
    store.clear();
    println!("Cart cleared.");

    Ok(())
}

/// One cart row: quantity, name, variant, line subtotal.
fn cart_line_row(line: &CartLine) -> String {
    let mut row = format!("{} x {}", line.quantity, line.name);
    match (&line.size, &line.color) {
        (Some(size), Some(color)) => row.push_str(&format!(" (talla {size}, {color})")),
        (Some(size), None) => row.push_str(&format!(" (talla {size})")),
        (None, Some(color)) => row.push_str(&format!(" ({color})")),
        (None, None) => {}
    }
    row.push_str(&format!("  {}", format_price(line.subtotal())));
    row
}
