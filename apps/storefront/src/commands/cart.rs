//! # Cart Commands
//!
//! Handlers for cart manipulation. Every handler goes through the session's
//! [`CartHandle`](crate::state::CartHandle); none of them touch the ledger.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart  ┌──────────┐  remove_item (last line)      │
//! │  │  Empty   │──────────────►│ In Cart  │──────────────────► Empty      │
//! │  │  Cart    │               │          │                                │
//! │  └──────────┘               └──────────┘                                │
//! │       ▲                      │   ▲   │                                  │
//! │       │          increment_item  │   decrement_item (floor 1)           │
//! │       │                      └───┘                                      │
//! │       └──────────────── clear_cart ─────────────────────────           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use greenlife_core::{CartSnapshot, LineItem, ProductId};

use crate::commands::product::get_product;
use crate::error::ApiError;
use crate::state::{AppContext, StoreConfig};

/// Cart totals summary for displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: i64,
    pub total_cents: i64,
    pub total_display: String,
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    pub revision: u64,
}

impl CartResponse {
    pub fn from_snapshot(snapshot: CartSnapshot, config: &StoreConfig) -> Self {
        CartResponse {
            totals: CartTotals {
                line_count: snapshot.line_count(),
                total_items: snapshot.total_items,
                total_cents: snapshot.total.cents(),
                total_display: config.format_currency(snapshot.total.cents()),
            },
            items: snapshot.items,
            revision: snapshot.revision,
        }
    }

    /// Whether a display should offer "-" for this line.
    pub fn can_decrement(&self, product_id: &str) -> bool {
        self.items
            .iter()
            .any(|i| i.id.as_str() == product_id && i.quantity > 1)
    }
}

/// Gets the current cart contents.
pub fn get_cart(ctx: &AppContext) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from_snapshot(ctx.cart.snapshot(), &ctx.config)
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Unknown product: `NOT_FOUND`, cart untouched
/// - Product already in cart: governed by the configured duplicate add policy
pub async fn add_to_cart(ctx: &AppContext, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = get_product(ctx, product_id)?;
    let snapshot = ctx.cart.add(&product).await?;
    Ok(CartResponse::from_snapshot(snapshot, &ctx.config))
}

/// Adds one unit to a line already in the cart.
pub async fn increment_item(ctx: &AppContext, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "increment_item command");

    let snapshot = ctx.cart.increment(&ProductId::from(product_id)).await?;
    Ok(CartResponse::from_snapshot(snapshot, &ctx.config))
}

/// Takes one unit off a line; a line at quantity 1 stays as it is.
pub async fn decrement_item(ctx: &AppContext, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "decrement_item command");

    let snapshot = ctx.cart.decrement(&ProductId::from(product_id)).await?;
    Ok(CartResponse::from_snapshot(snapshot, &ctx.config))
}

/// Removes a line from the cart.
pub async fn remove_item(ctx: &AppContext, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_item command");

    let snapshot = ctx.cart.remove(&ProductId::from(product_id)).await?;
    Ok(CartResponse::from_snapshot(snapshot, &ctx.config))
}

/// Clears all items from the cart.
pub async fn clear_cart(ctx: &AppContext) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    let snapshot = ctx.cart.reset().await?;
    Ok(CartResponse::from_snapshot(snapshot, &ctx.config))
}
