//! # Error Types
//!
//! Domain-specific error types for greenlife-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  greenlife-core errors (this file)                                     │
//! │  ├── LedgerError      - Cart operation failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  ├── DispatchError    - Ledger error or stopped dispatcher             │
//! │  └── ApiError         - What the display layer sees (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → LedgerError → DispatchError → ApiError        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed ledger operation never leaves a partial mutation behind: every
//! check runs before the first write.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Ledger Error
// =============================================================================

/// Errors raised by cart ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No line item with this product id is in the cart.
    ///
    /// ## When This Occurs
    /// - `increment`, `decrement` or `remove` on a product never added
    /// - A second `remove` of the same product
    /// - A stale display sending a command for an item removed elsewhere
    #[error("Item not found in cart: {0}")]
    ItemNotFound(ProductId),

    /// The command payload failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl LedgerError {
    /// Returns the product id for `ItemNotFound`, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            LedgerError::ItemNotFound(id) => Some(id),
            LedgerError::InvalidInput(_) => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before a ledger transition runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., the same product id twice in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
