//! # catalog-core: Pure Domain Logic for the Product Catalog
//!
//! This crate holds the product model as plain data and pure functions,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Calling code (services, tools)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │                  │   │
//! │  │   │  Category │  │  Decimal  │  │   checks  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    catalog-db (Database Layer)                  │   │
//! │  │            PostgreSQL queries, migrations, repositories         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, ProductPayload)
//! - [`money`] - Money type with integer cents
//! - [`error`] - Validation error type
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, Money, Product};
//!
//! let product = Product::new("Fedora", "A red hat", "12.50".parse().unwrap(), true, Category::Cloths);
//! assert_eq!(product.price, Money::from_cents(1250));
//! assert!(product.validate().is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum characters in a product name (`VARCHAR(100)`).
pub const MAX_NAME_LEN: usize = 100;

/// Maximum characters in a product description (`VARCHAR(250)`).
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Largest price that fits `NUMERIC(14,2)`: 999 999 999 999.99
pub const MAX_PRICE_CENTS: i64 = 99_999_999_999_999;
