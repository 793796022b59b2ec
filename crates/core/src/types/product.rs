//! Catalog product model and query criteria.
//!
//! The product shape mirrors the JSON served by the catalog API:
//! `{id, brand, name, priceOld?, priceNew, badge?, imageUrl?, category?}`.
//! Criteria matching is pure and lives here so the server repository and the
//! tests share one definition.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub brand: String,
    pub name: String,
    /// Pre-discount price, present only for discounted products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_old: Option<f64>,
    /// Current selling price.
    pub price_new: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Promotional badge shown on product cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(rename = "type")]
    pub kind: BadgeKind,
    pub text: String,
}

/// Badge variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Discount,
    New,
}

/// Catalog category labels.
///
/// The wire labels are the Spanish store sections; exact match only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "HOMBRE")]
    Men,
    #[serde(rename = "MUJER")]
    Women,
    #[serde(rename = "INFANTIL")]
    Kids,
}

impl Category {
    /// The wire/display label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "HOMBRE",
            Self::Women => "MUJER",
            Self::Kids => "INFANTIL",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOMBRE" => Ok(Self::Men),
            "MUJER" => Ok(Self::Women),
            "INFANTIL" => Ok(Self::Kids),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Error returned when a category label is not one of the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Catalog query criteria.
///
/// `search` is a case-insensitive substring match against name and brand;
/// `category` is an exact label match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCriteria {
    pub search: Option<String>,
    pub category: Option<Category>,
}

impl ProductCriteria {
    /// Criteria that matches every product.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            search: None,
            category: None,
        }
    }
}

impl Product {
    /// Whether this product satisfies the given criteria.
    #[must_use]
    pub fn matches(&self, criteria: &ProductCriteria) -> bool {
        if let Some(category) = criteria.category
            && self.category != Some(category)
        {
            return false;
        }
        if let Some(search) = &criteria.search {
            let needle = search.to_lowercase();
            return self.name.to_lowercase().contains(&needle)
                || self.brand.to_lowercase().contains(&needle);
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, brand: &str, name: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            brand: brand.to_string(),
            name: name.to_string(),
            price_old: None,
            price_new: 99.9,
            badge: None,
            image_url: None,
            category: Some(category),
        }
    }

    #[test]
    fn test_matches_empty_criteria() {
        let p = product(1, "North Star", "Zapatillas Urbanas", Category::Men);
        assert!(p.matches(&ProductCriteria::any()));
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        let p = product(1, "North Star", "Zapatillas Urbanas", Category::Men);
        let criteria = ProductCriteria {
            search: Some("zapatillas".to_string()),
            category: None,
        };
        assert!(p.matches(&criteria));

        // Brand matches too
        let criteria = ProductCriteria {
            search: Some("NORTH".to_string()),
            category: None,
        };
        assert!(p.matches(&criteria));

        let criteria = ProductCriteria {
            search: Some("sandalias".to_string()),
            category: None,
        };
        assert!(!p.matches(&criteria));
    }

    #[test]
    fn test_matches_category_exact() {
        let p = product(2, "Bata Comfit", "Sandalias Casual", Category::Women);
        let criteria = ProductCriteria {
            search: None,
            category: Some(Category::Women),
        };
        assert!(p.matches(&criteria));

        let criteria = ProductCriteria {
            search: None,
            category: Some(Category::Kids),
        };
        assert!(!p.matches(&criteria));
    }

    #[test]
    fn test_matches_combined_criteria() {
        let p = product(3, "Bubblegummers", "Zapatillas Escolares", Category::Kids);
        let criteria = ProductCriteria {
            search: Some("escolares".to_string()),
            category: Some(Category::Kids),
        };
        assert!(p.matches(&criteria));

        let criteria = ProductCriteria {
            search: Some("escolares".to_string()),
            category: Some(Category::Men),
        };
        assert!(!p.matches(&criteria));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Men.label(), "HOMBRE");
        assert_eq!("MUJER".parse::<Category>().unwrap(), Category::Women);
        assert!("mujer".parse::<Category>().is_err());
    }

    #[test]
    fn test_product_json_shape() {
        let p = Product {
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

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["priceNew"], 77.94);
        assert_eq!(json["badge"]["type"], "discount");
        assert_eq!(json["category"], "HOMBRE");
        // Absent optionals are omitted entirely
        assert!(json.get("imageUrl").is_none());
    }
}
