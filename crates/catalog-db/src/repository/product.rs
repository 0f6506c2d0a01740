//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD: `create`, `find`, `all`, `update`, `delete`
//! - Filtered lookups returning a lazy [`ProductQuery`]
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Lifecycle                                    │
//! │                                                                         │
//! │  Product::new(..)        id = None   (in memory only)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.create(&mut p)     INSERT ... RETURNING id → p.id = Some(n)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.update(&p) *       UPDATE ... WHERE id = n  (id never changes)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.delete(&p)         DELETE ... WHERE id = n  (row is gone)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::query::{ProductFilter, ProductQuery};
use catalog_core::{Category, Money, Product};

/// Entity name used in error messages.
const ENTITY: &str = "Product";

/// Column list shared by every SELECT, in `ProductRow` order.
pub(crate) const PRODUCT_COLUMNS: &str = "id, name, description, price, available, category";

/// One row of the `products` table as PostgreSQL returns it.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    available: bool,
    category: Category,
}

impl TryFrom<ProductRow> for Product {
    type Error = DbError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            // NUMERIC(14,2) always fits; normalizes scale for comparisons
            price: Money::from_decimal(row.price)?,
            available: row.available,
            category: row.category,
        })
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let mut hat = Product::new("Fedora", "A red hat", Money::from_cents(1250), true, Category::Cloths);
/// repo.create(&mut hat).await?;
///
/// let found = repo.find(hat.id.unwrap()).await?;
/// let hats = repo.find_by_name("Fedora").fetch_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: PgPool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and assigns the generated id to it.
    ///
    /// ## Returns
    /// * `Ok(id)` - The id now stored in `product.id`
    /// * `Err(DbError::AlreadyPersisted)` - Product already has an id
    /// * `Err(DbError::Validation)` - A field breaks a column rule
    /// * `Err(DbError::ConstraintViolation)` - The store rejected the row
    pub async fn create(&self, product: &mut Product) -> DbResult<i64> {
        if let Some(id) = product.id {
            return Err(DbError::AlreadyPersisted {
                entity: ENTITY.to_string(),
                id: id.to_string(),
            });
        }
        product.validate()?;

        debug!(name = %product.name, "Creating product");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.description.as_str())
        .bind(product.price.to_decimal())
        .bind(product.available)
        .bind(product.category)
        .fetch_one(&self.pool)
        .await?;

        product.id = Some(id);

        debug!(id, "Product created");
        Ok(id)
    }

    /// Writes the product's in-memory fields to its row.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful, `id` unchanged
    /// * `Err(DbError::NotPersisted)` - `product.id` is unset
    /// * `Err(DbError::NotFound)` - No row has that id
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let id = product.id.ok_or_else(|| DbError::not_persisted(ENTITY))?;
        product.validate()?;

        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                available = $5,
                category = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(product.name.as_str())
        .bind(product.description.as_str())
        .bind(product.price.to_decimal())
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }

    /// Permanently removes the product's row.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotPersisted)` - `product.id` is unset
    /// * `Err(DbError::NotFound)` - Row was already removed
    pub async fn delete(&self, product: &Product) -> DbResult<()> {
        let id = product.id.ok_or_else(|| DbError::not_persisted(ENTITY))?;

        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }

    /// Removes every product, returning how many rows were deleted.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        debug!(removed = result.rows_affected(), "Deleted all products");
        Ok(result.rows_affected())
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Finding product");

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Returns every product, ordered by id.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed all products");
        rows.into_iter().map(Product::try_from).collect()
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Products whose name matches exactly.
    pub fn find_by_name(&self, name: impl Into<String>) -> ProductQuery {
        self.query(ProductFilter::Name(name.into()))
    }

    /// Products with the given availability.
    pub fn find_by_availability(&self, available: bool) -> ProductQuery {
        self.query(ProductFilter::Available(available))
    }

    /// Products in the given category.
    pub fn find_by_category(&self, category: Category) -> ProductQuery {
        self.query(ProductFilter::Category(category))
    }

    /// Products priced exactly at `price`.
    pub fn find_by_price(&self, price: Money) -> ProductQuery {
        self.query(ProductFilter::Price(price))
    }

    fn query(&self, filter: ProductFilter) -> ProductQuery {
        debug!(?filter, "Building product query");
        ProductQuery::new(self.pool.clone(), filter)
    }
}
