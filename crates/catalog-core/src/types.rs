//! # Domain Types
//!
//! Core domain types of the product catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Product ─────────────┬──► Category (closed enum)                       │
//! │   id: Option<i64>     │                                                 │
//! │   name, description   └──► Money (integer cents)                        │
//! │   available                                                             │
//! │                                                                         │
//! │  ProductPayload ──► JSON input, never carries an id                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store on first insert. A product whose `id` is
//! `None` has never been persisted.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_description, validate_price, validate_product_name};

// =============================================================================
// Category
// =============================================================================

/// Catalog category of a product.
///
/// Stored as the PostgreSQL enum type `category`, whose labels are the
/// upper-case variant names.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "category", rename_all = "UPPERCASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// The upper-case name used in the database and in JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

/// JSON input follows the same rules as [`FromStr`]: any case, surrounding
/// whitespace ignored.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Store-assigned identifier; `None` until first persisted.
    pub id: Option<i64>,

    /// Display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Unit price.
    pub price: Money,

    /// Whether the product can currently be ordered.
    pub available: bool,

    /// Catalog category.
    pub category: Category,
}

impl Product {
    /// Creates a new, unpersisted product.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{Category, Money, Product};
    ///
    /// let hat = Product::new("Fedora", "A red hat", Money::from_cents(1250), true, Category::Cloths);
    /// assert_eq!(hat.id, None);
    /// assert_eq!(hat.to_string(), "<Product Fedora id=[None]>");
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        available: bool,
        category: Category,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Returns true once the store has assigned an id.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks every field against the rules the store enforces.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_product_name(&self.name)?;
        validate_description(&self.description)?;
        validate_price(self.price)?;
        Ok(())
    }

    /// Overwrites every field except `id` with the payload's values.
    pub fn apply(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
        self.available = payload.available;
        self.category = payload.category;
    }

    /// Serializes the product, id included, to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price,
            "available": self.available,
            "category": self.category,
        })
    }
}

/// Renders as `<Product {name} id=[{id}]>`; an unset id shows as `None`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

// =============================================================================
// Product Payload
// =============================================================================

/// Field values for a product as they arrive from outside (JSON).
///
/// Carries no `id`; ids are only ever assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub available: bool,
    pub category: Category,
}

impl ProductPayload {
    /// Parses a payload from JSON text.
    ///
    /// ## Errors
    /// `ValidationError::InvalidFormat` when a field is missing, has the
    /// wrong type (e.g. `available` not a boolean), the price cannot be
    /// parsed, or the category is unknown.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("product", e.to_string()))
    }

    /// Parses a payload from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value)
            .map_err(|e| ValidationError::invalid_format("product", e.to_string()))
    }
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        Product::new(
            payload.name,
            payload.description,
            payload.price,
            payload.available,
            payload.category,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
