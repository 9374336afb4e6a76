//! # Validation Module
//!
//! Input validation for cart commands and catalog records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Display                                                      │
//! │  └── Disables "-" at quantity 1, only offers catalog products          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command deserialization                                      │
//! │  └── Shape and types of the payload                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  └── Empty ids, negative prices, oversized names                       │
//! │                                                                         │
//! │  The ledger never trusts layer 1: a bypassed guard still lands here.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use greenlife_core::validation::{validate_price, validate_product_id};
//! use greenlife_core::Money;
//!
//! assert!(validate_product_id("1").is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{LineItem, Product};
use crate::{
    MAX_IMAGE_REF_LENGTH, MAX_PRODUCT_ID_LENGTH, MAX_PRODUCT_NAME_LENGTH, MAX_UNIT_PRICE,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LENGTH,
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Example
/// ```rust
/// use greenlife_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Monstera").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an image reference. Empty is allowed.
pub fn validate_image(image: &str) -> ValidationResult<()> {
    if image.len() > MAX_IMAGE_REF_LENGTH {
        return Err(ValidationError::TooLong {
            field: "image".to_string(),
            max: MAX_IMAGE_REF_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
/// - At most [`MAX_UNIT_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE.cents(),
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be at least 1 while the line exists
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of an add payload / catalog record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(product.id.as_str())?;
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_image(&product.image)
}

/// Validates a line item restored from a snapshot.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_product_id(item.id.as_str())?;
    validate_product_name(&item.name)?;
    validate_price(item.price)?;
    validate_image(&item.image)?;
    validate_quantity(item.quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("1").is_ok());
        assert!(validate_product_id("monstera-xl").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"9".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Orquídea").is_ok());
        assert!(validate_product_name(" ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_dollars(25)).is_ok());
        assert!(validate_price(MAX_UNIT_PRICE).is_ok());

        let out_of_range = Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE.cents(),
        });
        assert_eq!(validate_price(Money::from_cents(-100)), out_of_range);
        assert_eq!(
            validate_price(MAX_UNIT_PRICE + Money::from_cents(1)),
            out_of_range
        );
        assert_eq!(validate_price(Money::from_cents(i64::MAX / 2 + 1)), out_of_range);
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_product_reports_first_failure() {
        let product = Product::new("", "", Money::from_cents(-1), "");
        assert_eq!(
            validate_product(&product),
            Err(ValidationError::Required {
                field: "id".to_string()
            })
        );
    }

    #[test]
    fn test_validate_line_item_quantity() {
        let product = Product::new(2, "Cactus", Money::from_dollars(10), "");
        let mut item = LineItem::from_product(&product);
        assert!(validate_line_item(&item).is_ok());

        item.quantity = 0;
        assert!(validate_line_item(&item).is_err());
    }
}
