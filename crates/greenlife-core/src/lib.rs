//! # greenlife-core: Cart Ledger for the GreenLife Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart
//! ledger and everything it needs as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     GreenLife Storefront Architecture                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Display (console / any web frontend)               │   │
//! │  │    Catalog view ──► Cart view ──► item count badge              │   │
//! │  └──────────────┬──────────────────────────────▲───────────────────┘   │
//! │                 │ CartCommand                   │ CartSnapshot          │
//! │  ┌──────────────▼──────────────────────────────┴───────────────────┐   │
//! │  │             apps/storefront (dispatcher task)                    │   │
//! │  │    mpsc queue ──► single owner ──► watch channel                 │   │
//! │  └──────────────┬───────────────────────────────────────────────────┘   │
//! │                 │                                                       │
//! │  ┌──────────────▼──────────────────────────────────────────────────┐   │
//! │  │               ★ greenlife-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │CartLedger │  │   rules   │  │   │
//! │  │   │ LineItem  │  │           │  │ Snapshot  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TASKS • NO ENVIRONMENT • PURE TRANSITIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, Product, LineItem)
//! - [`money`] - Money type with integer arithmetic
//! - [`ledger`] - The cart ledger state machine and its snapshots
//! - [`command`] - Serializable cart commands
//! - [`catalog`] - The static plant catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use greenlife_core::{CartLedger, Catalog, ProductId};
//!
//! let catalog = Catalog::plants();
//! let monstera = catalog.get(&ProductId::from(1)).unwrap();
//!
//! let mut ledger = CartLedger::new();
//! ledger.add(monstera).unwrap();
//! ledger.increment(&monstera.id).unwrap();
//!
//! assert_eq!(ledger.total_items(), 2);
//! assert_eq!(ledger.total().cents(), 3000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod command;
pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use command::CartCommand;
pub use error::{LedgerError, LedgerResult, ValidationError};
pub use ledger::{AggregateDrift, CartLedger, CartSnapshot, Transition};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product identifier.
pub const MAX_PRODUCT_ID_LENGTH: usize = 64;

/// Maximum length of a product display name.
pub const MAX_PRODUCT_NAME_LENGTH: usize = 200;

/// Highest accepted unit price ($1,000,000.00).
///
/// Keeps cart totals far from `i64` overflow for any realistic cart.
pub const MAX_UNIT_PRICE: Money = Money::from_dollars(1_000_000);

/// Maximum length of an image reference.
///
/// Images are opaque to the ledger; the cap only keeps snapshots bounded.
pub const MAX_IMAGE_REF_LENGTH: usize = 2048;
