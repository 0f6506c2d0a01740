//! # catalog-db: Database Layer for the Product Catalog
//!
//! This crate provides database access for the product catalog.
//! It uses PostgreSQL with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Data Flow                           │
//! │                                                                         │
//! │  Calling code (db.products().create(&mut product))                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ PgPool        │◄───│ ProductRepo   │    │ 0001_create_ │  │   │
//! │  │   │ DbConfig      │    │ ProductQuery  │    │ products.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgreSQL (DATABASE_URI)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Product repository and lazy queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::{Category, Money, Product};
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let mut hat = Product::new("Fedora", "A red hat", Money::from_cents(1250), true, Category::Cloths);
//! db.products().create(&mut hat).await?;
//!
//! let clothes = db.products().find_by_category(Category::Cloths).count().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::query::{ProductFilter, ProductQuery};
