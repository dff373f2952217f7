use serde::{Deserialize, Serialize};

use super::category::CategoryRef;
use super::sub_category::SubCategoryRef;

/// A priced, quantified configuration of a product. Variants carry no id of
/// their own; they are owned by the product and positioned by index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    pub ram: String,
    pub price: f64,
    pub qty: u32,
}

/// Product as returned by `GET /api/products`.
///
/// Category and sub-category references are optional at render time: the
/// backend does not cascade deletes, so a product may outlive the category
/// it points to and must still render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(rename = "subCategory", default)]
    pub sub_category: Option<SubCategoryRef>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Lowest and highest variant price, for card summaries.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.variants.iter().map(|v| v.price);
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some((min, max))
    }

    pub fn total_qty(&self) -> u32 {
        self.variants.iter().map(|v| v.qty).sum()
    }
}

/// Payload for `POST /api/products` and `PUT /api/products/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "subCategoryId")]
    pub sub_category_id: String,
    pub variants: Vec<Variant>,
}

impl ProductDto {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Product name is required");
        }
        if self.category_id.is_empty() {
            anyhow::bail!("Category is required");
        }
        if self.sub_category_id.is_empty() {
            anyhow::bail!("Sub-category is required");
        }
        if self.variants.is_empty() {
            anyhow::bail!("A product needs at least one variant");
        }
        for variant in &self.variants {
            if variant.ram.trim().is_empty() {
                anyhow::bail!("Variant RAM label is required");
            }
            if variant.price < 0.0 {
                anyhow::bail!("Variant price cannot be negative");
            }
        }
        Ok(())
    }
}

/// Query parameters of `GET /api/products`. Empty filters are omitted from
/// the query string.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(rename = "categoryId", skip_serializing_if = "String::is_empty")]
    pub category_id: String,
    #[serde(rename = "subCategoryId", skip_serializing_if = "String::is_empty")]
    pub sub_category_id: String,
    pub page: usize,
    pub limit: usize,
}

/// Pagination envelope attached to the product listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

/// Response of `GET /api/products`. Unlike categories and sub-categories
/// (plain arrays), products come wrapped in a pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(ram: &str, price: f64, qty: u32) -> Variant {
        Variant {
            ram: ram.into(),
            price,
            qty,
        }
    }

    #[test]
    fn decodes_paginated_envelope() {
        let json = r#"{
            "products": [{
                "_id": "665f1c2a9b1e8a0012d4c300",
                "name": "Pixel 9",
                "description": "Phone",
                "image": null,
                "category": {"_id": "665f1c2a9b1e8a0012d4c100", "name": "Phones"},
                "subCategory": {"_id": "665f1c2a9b1e8a0012d4c200", "name": "Android"},
                "variants": [{"ram": "8GB", "price": 699.0, "qty": 5}]
            }],
            "pagination": {"page": 1, "limit": 10, "total": 1, "pages": 1}
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.products[0].variants[0].qty, 5);
    }

    #[test]
    fn renders_without_populated_refs() {
        // Deleting a referenced category must not break product decoding.
        let json = r#"{"_id":"665f1c2a9b1e8a0012d4c301","name":"Orphan","variants":[]}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.category.is_none());
        assert!(product.sub_category.is_none());
    }

    #[test]
    fn validate_requires_a_variant() {
        let dto = ProductDto {
            name: "Pixel 9".into(),
            description: "Phone".into(),
            category_id: "c1".into(),
            sub_category_id: "s1".into(),
            variants: vec![],
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_price() {
        let dto = ProductDto {
            name: "Pixel 9".into(),
            description: "Phone".into(),
            category_id: "c1".into(),
            sub_category_id: "s1".into(),
            variants: vec![variant("8GB", -1.0, 0)],
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn price_range_and_total_qty() {
        let product = Product {
            id: "p1".into(),
            name: "Pixel 9".into(),
            description: String::new(),
            image: None,
            category: None,
            sub_category: None,
            variants: vec![variant("8GB", 699.0, 5), variant("12GB", 799.0, 2)],
        };
        assert_eq!(product.price_range(), Some((699.0, 799.0)));
        assert_eq!(product.total_qty(), 7);
    }
}
