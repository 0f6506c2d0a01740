//! # Repository Module
//!
//! Database repository implementations for the product catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Calling code                                                          │
//! │       │                                                                 │
//! │       │  db.products().find_by_category(Category::Food)                │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, &mut product)                                       │
//! │  ├── find(&self, id) / all(&self)                                      │
//! │  ├── update(&self, &product)                                           │
//! │  ├── delete(&self, &product)                                           │
//! │  └── find_by_*(&self, value) ──► ProductQuery (lazy)                   │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  PostgreSQL                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and lookups
//! - [`ProductQuery`](query::ProductQuery) - Lazy filtered collections

pub mod product;
pub mod query;
