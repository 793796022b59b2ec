//! Catalog browsing commands.

use torres_core::{Product, ProductId, format_price};

use super::Context;
use crate::analytics;

/// List products matching the given filters.
pub async fn list(
    ctx: &Context,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let products = ctx.api.list_products(search, category).await?;

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in &products {
        println!("{}", listing_line(product));
    }

    if search.is_some() {
        let session = ctx.session_store().current().unwrap_or(None);
        analytics::track(
            &ctx.api,
            session.as_ref(),
            "search",
            None,
            Some(serde_json::json!({ "term": search })),
        )
        .await;
    }

    Ok(())
}

/// Show one product in detail.
pub async fn show(ctx: &Context, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let product_id = ProductId::new(id);
    let Some(product) = ctx.api.get_product(product_id).await? else {
        return Err(format!("Product {id} not found").into());
    };

    println!("{} {}", product.brand, product.name);
    if let Some(old) = product.price_old {
        println!("  price: {} (was {})", format_price(product.price_new), format_price(old));
    } else {
        println!("  price: {}", format_price(product.price_new));
    }
    if let Some(badge) = &product.badge {
        println!("  badge: {}", badge.text);
    }
    if let Some(category) = product.category {
        println!("  category: {category}");
    }
    if let Some(url) = &product.image_url {
        println!("  image: {url}");
    }

    let session = ctx.session_store().current().unwrap_or(None);
    analytics::track(&ctx.api, session.as_ref(), "view_product", Some(product_id), None).await;

    Ok(())
}

/// One listing row: id, brand, name, price, optional badge.
fn listing_line(product: &Product) -> String {
    let mut line = format!(
        "#{:<3} {} {}  {}",
        product.id,
        product.brand,
        product.name,
        format_price(product.price_new)
    );
    if let Some(badge) = &product.badge {
        line.push_str(&format!("  [{}]", badge.text));
    }
    line
}

#[cfg(test)]
mod tests {
    use torres_core::{Badge, BadgeKind, Category};

    use super::*;

    #[test]
    fn test_listing_line_with_badge() {
        let product = Product {
            id: ProductId::new(1),
            brand: "North Star".to_string(),
            name: "Zapatillas Urbanas Hombre".to_string(),
            price_old: Some(129.90),
            price_new: 77.94,
            badge: Some(Badge {
                kind: BadgeKind::Discount,
                text: "-40%".to_string(),
            }),
            image_url: None,
            category: Some(Category::Men),
        };

        let line = listing_line(&product);
        assert!(line.contains("North Star"));
        assert!(line.contains("S/ 77.94"));
        assert!(line.contains("[-40%]"));
    }

    #[test]
    fn test_listing_line_without_badge() {
        let product = Product {
            id: ProductId::new(6),
            brand: "Bubblegummers".to_string(),
            name: "Botas de Lluvia".to_string(),
            price_old: None,
            price_new: 59.90,
            badge: None,
            image_url: None,
            category: Some(Category::Kids),
        };

        let line = listing_line(&product);
        assert!(line.contains("S/ 59.90"));
        assert!(!line.contains('['));
    }
}
