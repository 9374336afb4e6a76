//! # Product Commands
//!
//! Read-only access to the session catalog.

use serde::{Deserialize, Serialize};
use tracing::debug;

use greenlife_core::{Product, ProductId};

use crate::error::ApiError;
use crate::state::{AppContext, StoreConfig};

/// Product DTO for displays.
///
/// Carries the raw price for arithmetic and a formatted one for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub price_display: String,
    pub image: String,
}

impl ProductDto {
    pub fn from_product(product: &Product, config: &StoreConfig) -> Self {
        ProductDto {
            id: product.id.to_string(),
            name: product.name.clone(),
            price_cents: product.price.cents(),
            price_display: config.format_currency(product.price.cents()),
            image: product.image.clone(),
        }
    }
}

/// Lists the catalog in its fixed order.
pub fn list_products(ctx: &AppContext) -> Vec<ProductDto> {
    debug!(count = ctx.catalog.len(), "list_products command");
    ctx.catalog
        .iter()
        .map(|p| ProductDto::from_product(p, &ctx.config))
        .collect()
}

/// Looks up one catalog product.
pub fn get_product(ctx: &AppContext, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    ctx.catalog
        .get(&ProductId::from(product_id))
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}
