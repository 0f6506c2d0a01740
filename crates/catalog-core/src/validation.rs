//! # Validation Module
//!
//! Field validation for products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Product::validate()                                                    │
//! │       │                                                                 │
//! │       ├── validate_product_name   (1..=100 chars, VARCHAR(100))         │
//! │       ├── validate_description    (1..=250 chars, VARCHAR(250))         │
//! │       └── validate_price          (0 ..= 999 999 999 999.99)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Repository insert / update                                             │
//! │                                                                         │
//! │  The limits mirror the column definitions, so a product that passes    │
//! │  here is never rejected by the store for its field values.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_product_name, validate_price};
//! use catalog_core::Money;
//!
//! assert!(validate_product_name("Fedora").is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters, surrounding whitespace included
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Fedora").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be blank
/// - At most 250 characters, surrounding whitespace included
pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_text("description", description, MAX_DESCRIPTION_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    // VARCHAR(n) counts characters, not bytes, and keeps surrounding spaces
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed
/// - Must fit in NUMERIC(14,2)
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
/// use catalog_core::Money;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
