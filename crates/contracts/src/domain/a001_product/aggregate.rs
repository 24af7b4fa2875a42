use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::search::Searchable;

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// Catalog item sold by a merchant
///
/// `merchant` references the owning UMKM by name. Price is positive; stock is
/// unsigned, so never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    #[serde(rename = "umkm")]
    pub merchant: String,
    pub price: f64,
    pub stock: u32,
    pub sold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variations: Vec<ProductVariation>,
}

/// Image shown for products created from the form
pub const PLACEHOLDER_IMAGE: &str = "/images/product/placeholder.png";

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Produk"
    }

    fn list_name() -> &'static str {
        "Kelola Produk"
    }

    fn id_prefix() -> &'static str {
        "P"
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.merchant.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let product = Product {
            id: "P001".into(),
            name: "Basreng Pedas".into(),
            image: PLACEHOLDER_IMAGE.into(),
            category: "FnB".into(),
            merchant: "Basreng bakar by Hilni".into(),
            price: 15000.0,
            stock: 10,
            sold: 2,
            permit_number: Some("PIRT-123".into()),
            description: None,
            variations: vec![],
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["umkm"], "Basreng bakar by Hilni");
        assert_eq!(json["permitNumber"], "PIRT-123");
        assert!(json.get("description").is_none());

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Product::full_name(), "a001_product");
        assert_eq!(Product::id_prefix(), "P");
    }
}
