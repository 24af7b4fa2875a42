//! Add/edit product form
use serde::{Deserialize, Serialize};

use super::aggregate::{Product, ProductVariation, PLACEHOLDER_IMAGE};
use crate::shared::validation::{parse_count, parse_positive_amount, FieldErrors};

pub const DEFAULT_CATEGORY: &str = "FnB";

pub mod fields {
    pub const MERCHANT: &str = "merchant";
    pub const NAME: &str = "name";
    pub const STOCK: &str = "stock";
    pub const PRICE: &str = "price";

    pub fn variation(index: usize, column: &str) -> String {
        format!("variations.{index}.{column}")
    }
}

/// Raw variation row as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariationDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl VariationDraft {
    /// A row with any blank column is dropped on submit
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty() && !self.stock.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationColumn {
    Name,
    Price,
    Stock,
}

/// Raw product form state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub merchant: String,
    pub category: String,
    pub stock: String,
    pub permit_number: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub variations: Vec<VariationDraft>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            merchant: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            stock: String::new(),
            permit_number: String::new(),
            name: String::new(),
            price: String::new(),
            description: String::new(),
            variations: Vec::new(),
        }
    }
}

/// Validated product fields, without the identity the repository assigns
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub merchant: String,
    pub category: String,
    pub stock: u32,
    pub permit_number: Option<String>,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub variations: Vec<ProductVariation>,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl ProductDraft {
    /// Edit form pre-populated from an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            merchant: product.merchant.clone(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            permit_number: product.permit_number.clone().unwrap_or_default(),
            name: product.name.clone(),
            price: format_amount(product.price),
            description: product.description.clone().unwrap_or_default(),
            variations: product
                .variations
                .iter()
                .map(|v| VariationDraft {
                    name: v.name.clone(),
                    price: format_amount(v.price),
                    stock: v.stock.to_string(),
                })
                .collect(),
        }
    }

    pub fn add_variation(&mut self) {
        self.variations.push(VariationDraft::default());
    }

    pub fn remove_variation(&mut self, index: usize) {
        if index < self.variations.len() {
            self.variations.remove(index);
        }
    }

    pub fn update_variation(&mut self, index: usize, column: VariationColumn, value: String) {
        if let Some(row) = self.variations.get_mut(index) {
            match column {
                VariationColumn::Name => row.name = value,
                VariationColumn::Price => row.price = value,
                VariationColumn::Stock => row.stock = value,
            }
        }
    }

    pub fn validate(&self) -> Result<ProductInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let merchant = errors.require(fields::MERCHANT, &self.merchant, "UMKM harus diisi.");
        let name = errors.require(fields::NAME, &self.name, "Nama produk harus diisi.");
        let stock = parse_count(&self.stock);
        if stock.is_none() {
            errors.add(fields::STOCK, "Stok harus angka valid.");
        }
        let price = parse_positive_amount(&self.price);
        if price.is_none() {
            errors.add(fields::PRICE, "Harga harus angka yang valid.");
        }

        let mut variations = Vec::new();
        for (index, row) in self.variations.iter().enumerate() {
            if !row.is_complete() {
                continue;
            }
            let row_price = parse_positive_amount(&row.price);
            if row_price.is_none() {
                errors.add(fields::variation(index, "price"), "Harga variasi harus angka yang valid.");
            }
            let row_stock = parse_count(&row.stock);
            if row_stock.is_none() {
                errors.add(fields::variation(index, "stock"), "Stok variasi harus angka valid.");
            }
            if let (Some(price), Some(stock)) = (row_price, row_stock) {
                variations.push(ProductVariation {
                    name: row.name.trim().to_string(),
                    price,
                    stock,
                });
            }
        }

        let category = optional(&self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        match (stock, price) {
            (Some(stock), Some(price)) => errors.into_result(ProductInput {
                merchant,
                category,
                stock,
                permit_number: optional(&self.permit_number),
                name,
                price,
                description: optional(&self.description),
                variations,
            }),
            _ => Err(errors),
        }
    }
}

impl ProductInput {
    /// New product with a repository-assigned id; nothing sold yet
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            image: PLACEHOLDER_IMAGE.to_string(),
            category: self.category,
            merchant: self.merchant,
            price: self.price,
            stock: self.stock,
            sold: 0,
            permit_number: self.permit_number,
            description: self.description,
            variations: self.variations,
        }
    }

    /// Replacement for an edited product; id, image and sold count are kept
    pub fn apply_to(self, original: &Product) -> Product {
        Product {
            id: original.id.clone(),
            image: original.image.clone(),
            sold: original.sold,
            ..self.into_product(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductDraft {
        ProductDraft {
            merchant: "Basreng bakar by Hilni".into(),
            name: "Basreng Pedas".into(),
            stock: "10".into(),
            price: "15000".into(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_empty_draft_reports_required_fields() {
        let errors = ProductDraft::default().validate().unwrap_err();
        assert_eq!(errors.get(fields::MERCHANT), Some("UMKM harus diisi."));
        assert_eq!(errors.get(fields::NAME), Some("Nama produk harus diisi."));
        assert_eq!(errors.get(fields::STOCK), Some("Stok harus angka valid."));
        assert_eq!(errors.get(fields::PRICE), Some("Harga harus angka yang valid."));
    }

    #[test]
    fn test_valid_draft() {
        let input = filled().validate().unwrap();
        assert_eq!(input.category, DEFAULT_CATEGORY);
        assert_eq!(input.stock, 10);
        assert_eq!(input.price, 15000.0);
        assert_eq!(input.permit_number, None);
    }

    #[test]
    fn test_stock_and_price_bounds() {
        let mut draft = filled();
        draft.stock = "0".into();
        assert!(draft.validate().is_ok());

        draft.stock = "-1".into();
        assert!(draft.validate().unwrap_err().contains(fields::STOCK));

        draft.stock = "3".into();
        draft.price = "0".into();
        assert!(draft.validate().unwrap_err().contains(fields::PRICE));
    }

    #[test]
    fn test_incomplete_variation_rows_are_dropped() {
        let mut draft = filled();
        draft.add_variation();
        draft.update_variation(0, VariationColumn::Name, "Pedas".into());
        draft.update_variation(0, VariationColumn::Price, "16000".into());
        draft.update_variation(0, VariationColumn::Stock, "4".into());
        draft.add_variation();
        draft.update_variation(1, VariationColumn::Name, "Original".into());

        let input = draft.validate().unwrap();
        assert_eq!(input.variations.len(), 1);
        assert_eq!(input.variations[0].name, "Pedas");
        assert_eq!(input.variations[0].stock, 4);
    }

    #[test]
    fn test_complete_variation_must_be_valid() {
        let mut draft = filled();
        draft.variations.push(VariationDraft {
            name: "Pedas".into(),
            price: "0".into(),
            stock: "x".into(),
        });
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains("variations.0.price"));
        assert!(errors.contains("variations.0.stock"));
    }

    #[test]
    fn test_remove_variation_out_of_range_is_ignored() {
        let mut draft = filled();
        draft.add_variation();
        draft.remove_variation(5);
        assert_eq!(draft.variations.len(), 1);
        draft.remove_variation(0);
        assert!(draft.variations.is_empty());
    }

    #[test]
    fn test_edit_preserves_identity_fields() {
        let original = filled().validate().unwrap().into_product("P007".into());
        let original = Product {
            sold: 12,
            image: "/images/product/basreng.png".into(),
            ..original
        };

        let mut draft = ProductDraft::from_product(&original);
        assert_eq!(draft.price, "15000");
        draft.name = "Basreng Original".into();
        let edited = draft.validate().unwrap().apply_to(&original);

        assert_eq!(edited.id, "P007");
        assert_eq!(edited.sold, 12);
        assert_eq!(edited.image, "/images/product/basreng.png");
        assert_eq!(edited.name, "Basreng Original");
    }
}
