//! Checkout: local receipt generation.
//!
//! There is no payment processor; completing an order writes a plain-text
//! receipt to the data directory, ships a purchase event best-effort, and
//! clears the cart. Checkout requires a signed-in user and a non-empty cart.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use torres_core::{Cart, format_price};
use uuid::Uuid;

use super::Context;
use crate::analytics;
use crate::session::Session;

/// Complete the order in the cart.
pub async fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let Some(session) = ctx.session_store().current()? else {
        return Err("You must be signed in to check out.".into());
    };

    let mut store = ctx.open_cart_store();
    if store.cart().is_empty() {
        return Err("Your cart is empty.".into());
    }

    let order_id = Uuid::new_v4();
    let receipt = render_receipt(order_id, &session, store.cart());
    let path = write_receipt(ctx, order_id, &receipt)?;

    let total = store.total();
    analytics::track(
        &ctx.api,
        Some(&session),
        "purchase",
        None,
        Some(serde_json::json!({ "order_id": order_id, "total": total })),
    )
    .await;

    // Order completed: the cart resets.
    store.clear();

    println!("Order {order_id} completed, total {}.", format_price(total));
    println!("Receipt written to {}.", path.display());

    Ok(())
}

/// Render the plain-text receipt body.
fn render_receipt(order_id: Uuid, session: &Session, cart: &Cart) -> String {
    let mut receipt = String::new();
    receipt.push_str("COMERCIAL TORRES\n");
    receipt.push_str(&format!("Order:    {order_id}\n"));
    receipt.push_str(&format!("Date:     {}\n", Utc::now().to_rfc3339()));
    receipt.push_str(&format!("Customer: {}\n", session.email));
    receipt.push('\n');

    for line in cart.lines() {
        let mut item = format!("  {} x {}", line.quantity, line.name);
        if let Some(size) = &line.size {
            item.push_str(&format!(", talla {size}"));
        }
        if let Some(color) = &line.color {
            item.push_str(&format!(", {color}"));
        }
        receipt.push_str(&format!("{item}  {}\n", format_price(line.subtotal())));
    }

    receipt.push('\n');
    receipt.push_str(&format!("TOTAL: {}\n", format_price(cart.total())));
    receipt
}

/// Write the receipt under `<data-dir>/receipts/`.
fn write_receipt(
    ctx: &Context,
    order_id: Uuid,
    receipt: &str,
) -> Result<PathBuf, std::io::Error> {
    let dir = ctx.data_dir.join("receipts");
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("order-{order_id}.txt"));
    fs::write(&path, receipt)?;
    Ok(path)
}
