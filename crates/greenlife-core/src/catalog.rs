//! # Catalog
//!
//! The static product list the storefront sells from. The catalog is
//! supplied once at startup and is read-only afterwards; the ledger copies
//! what it needs into its line items and never touches the catalog.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::{validate_product, ValidationResult};

/// Image reference used by the built-in plant catalog.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";

/// An ordered, id-unique list of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid records and duplicate ids.
    pub fn from_products(products: Vec<Product>) -> ValidationResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id.clone()) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.to_string(),
                });
            }
        }

        Ok(Catalog { products })
    }

    /// The GreenLife plant range.
    ///
    /// | id | name      | price  |
    /// |----|-----------|--------|
    /// | 1  | Monstera  | $15.00 |
    /// | 2  | Cactus    | $10.00 |
    /// | 3  | Pothos    | $12.00 |
    /// | 4  | Suculenta | $8.00  |
    /// | 5  | Bambú     | $20.00 |
    /// | 6  | Orquídea  | $25.00 |
    pub fn plants() -> Self {
        let plant = |id: u32, name: &str, dollars: i64| {
            Product::new(id, name, Money::from_dollars(dollars), PLACEHOLDER_IMAGE)
        };

        Catalog {
            products: vec![
                plant(1, "Monstera", 15),
                plant(2, "Cactus", 10),
                plant(3, "Pothos", 12),
                plant(4, "Suculenta", 8),
                plant(5, "Bambú", 20),
                plant(6, "Orquídea", 25),
            ],
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::plants()
    }
}
