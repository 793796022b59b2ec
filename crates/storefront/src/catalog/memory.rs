//! In-memory product repository with the seed catalog.

use std::sync::RwLock;

use torres_core::{
    Badge, BadgeKind, Category, Product, ProductCriteria, ProductId,
};

use super::{ProductRepository, RepositoryError};

/// Catalog held in memory, seeded at startup.
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Repository over an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Repository seeded with the store catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_all(&self, criteria: &ProductCriteria) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|e| RepositoryError::Poisoned(e.to_string()))?;
        Ok(products
            .iter()
            .filter(|p| p.matches(criteria))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|e| RepositoryError::Poisoned(e.to_string()))?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|e| RepositoryError::Poisoned(e.to_string()))?;
        products.push(product.clone());
        Ok(product)
    }
}

/// The seed catalog served until real product persistence lands.
fn seed_products() -> Vec<Product> {
    vec![
        Product {
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
        },
        Product {
            id: ProductId::new(2),
            brand: "Bata Comfit".to_string(),
            name: "Sandalias Casual Mujer".to_string(),
            price_old: None,
            price_new: 89.90,
            badge: Some(Badge {
                kind: BadgeKind::New,
                text: "NUEVO".to_string(),
            }),
            image_url: None,
            category: Some(Category::Women),
        },
        Product {
            id: ProductId::new(3),
            brand: "Bubblegummers".to_string(),
            name: "Zapatillas Escolares Niños".to_string(),
            price_old: Some(99.90),
            price_new: 79.92,
            badge: Some(Badge {
                kind: BadgeKind::Discount,
                text: "-20%".to_string(),
            }),
            image_url: None,
            category: Some(Category::Kids),
        },
        Product {
            id: ProductId::new(4),
            brand: "Power".to_string(),
            name: "Zapatillas Deportivas Running".to_string(),
            price_old: None,
            price_new: 149.90,
            badge: None,
            image_url: None,
            category: Some(Category::Men),
        },
        Product {
            id: ProductId::new(5),
            brand: "Bata".to_string(),
            name: "Tacones Elegantes".to_string(),
            price_old: None,
            price_new: 199.90,
            badge: None,
            image_url: None,
            category: Some(Category::Women),
        },
        Product {
            id: ProductId::new(6),
            brand: "Bubblegummers".to_string(),
            name: "Botas de Lluvia".to_string(),
            price_old: None,
            price_new: 59.90,
            badge: None,
            image_url: None,
            category: Some(Category::Kids),
        },
    ]
}
