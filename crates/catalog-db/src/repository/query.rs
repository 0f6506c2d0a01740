//! # Product Queries
//!
//! Lazy, countable product collections returned by the `find_by_*` lookups.
//!
//! ```text
//! repo.find_by_category(Category::Food)   ← no SQL yet
//!     │
//!     ├── .count().await       SELECT COUNT(*) FROM products WHERE category = $1
//!     ├── .fetch_all().await   SELECT ... WHERE category = $1 ORDER BY id
//!     └── .first().await       SELECT ... WHERE category = $1 ORDER BY id LIMIT 1
//! ```

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::product::{ProductRow, PRODUCT_COLUMNS};
use catalog_core::{Category, Money, Product};

/// A single equality filter over one product column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    Name(String),
    Available(bool),
    Category(Category),
    Price(Money),
}

impl ProductFilter {
    /// Column the filter compares against.
    pub fn column(&self) -> &'static str {
        match self {
            ProductFilter::Name(_) => "name",
            ProductFilter::Available(_) => "available",
            ProductFilter::Category(_) => "category",
            ProductFilter::Price(_) => "price",
        }
    }

    /// True when `product` would be returned by this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::Name(name) => product.name == *name,
            ProductFilter::Available(available) => product.available == *available,
            ProductFilter::Category(category) => product.category == *category,
            ProductFilter::Price(price) => product.price == *price,
        }
    }

    fn push_predicate(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        builder.push(" WHERE ").push(self.column()).push(" = ");
        match self {
            ProductFilter::Name(name) => builder.push_bind(name.clone()),
            ProductFilter::Available(available) => builder.push_bind(*available),
            ProductFilter::Category(category) => builder.push_bind(*category),
            ProductFilter::Price(price) => builder.push_bind(price.to_decimal()),
        };
    }
}

fn select_builder(filter: &ProductFilter, limit: Option<i64>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
    filter.push_predicate(&mut builder);
    builder.push(" ORDER BY id");
    if let Some(limit) = limit {
        builder.push(" LIMIT ").push_bind(limit);
    }
    builder
}

fn count_builder(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM products");
    filter.push_predicate(&mut builder);
    builder
}

/// Products matching a [`ProductFilter`], fetched on demand.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pool: PgPool,
    filter: ProductFilter,
}

impl ProductQuery {
    pub(crate) fn new(pool: PgPool, filter: ProductFilter) -> Self {
        ProductQuery { pool, filter }
    }

    /// The filter this query applies.
    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Number of matching products.
    pub async fn count(&self) -> DbResult<i64> {
        let mut builder = count_builder(&self.filter);
        let count: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        debug!(filter = ?self.filter, count, "Counted products");
        Ok(count)
    }

    /// All matching products, ordered by id.
    pub async fn fetch_all(&self) -> DbResult<Vec<Product>> {
        let mut builder = select_builder(&self.filter, None);
        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(filter = ?self.filter, count = rows.len(), "Fetched products");
        rows.into_iter().map(Product::try_from).collect()
    }

    /// The matching product with the lowest id, if any.
    pub async fn first(&self) -> DbResult<Option<Product>> {
        let mut builder = select_builder(&self.filter, Some(1));
        let row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }
}
