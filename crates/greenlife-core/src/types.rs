//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   add()    ┌─────────────────┐                    │
//! │  │    Product      │ ─────────► │    LineItem     │                    │
//! │  │  ─────────────  │            │  ─────────────  │                    │
//! │  │  id             │            │  id             │                    │
//! │  │  name           │            │  name           │                    │
//! │  │  price          │            │  price (frozen) │                    │
//! │  │  image          │            │  image          │                    │
//! │  └─────────────────┘            │  quantity ≥ 1   │                    │
//! │   (catalog, static)             └─────────────────┘                    │
//! │                                  (cart, mutable)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable product key. Line items are unique by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

/// Numeric catalog ids (`1`, `2`, ...) map to their decimal string.
impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id.to_string())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog record. Also the payload of an add command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Opaque image reference, carried along for display only.
    pub image: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Price Freezing
/// `price` is captured from the product on first add. Later adds of the same
/// product never rewrite it; every increment, decrement and removal works
/// from this frozen price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,

    /// Units of this product in the cart, never below 1.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item with quantity 1 from a product.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Duplicate Add Policy
// =============================================================================

/// What `add` does when the product is already in the cart.
///
/// ```text
/// cart: [{id 1, price $15, qty 1}], total $15, totalItems 1
///
/// add(1, $15) under AggregateOnly → qty 1, total $30, totalItems 2
/// add(1, $15) under Increment     → qty 2, total $30, totalItems 2
/// ```
///
/// `AggregateOnly` is the storefront's historical contract: the aggregates
/// move as if a unit was added while the line quantity stays put. Displays
/// built against it rely on that exact divergence. `Increment` keeps the
/// aggregates equal to their recomputation and must be opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateAddPolicy {
    /// Aggregates grow, the line quantity does not.
    #[default]
    AggregateOnly,
    /// A duplicate add behaves exactly like `increment`.
    Increment,
}

impl fmt::Display for DuplicateAddPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateAddPolicy::AggregateOnly => write!(f, "aggregate_only"),
            DuplicateAddPolicy::Increment => write!(f, "increment"),
        }
    }
}

impl FromStr for DuplicateAddPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aggregate_only" | "aggregate-only" | "compat" => Ok(DuplicateAddPolicy::AggregateOnly),
            "increment" | "merge" => Ok(DuplicateAddPolicy::Increment),
            other => Err(format!("Unknown duplicate add policy: {}", other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
