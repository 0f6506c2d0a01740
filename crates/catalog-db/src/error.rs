//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  PostgreSQL Error (sqlx::Error)      ValidationError (catalog-core)    │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller                                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Categories
//! - not-found: [`DbError::NotFound`], [`DbError::NotPersisted`]
//! - constraint violation: [`DbError::Validation`],
//!   [`DbError::UniqueViolation`], [`DbError::ConstraintViolation`]

use catalog_core::ValidationError;
use thiserror::Error;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE class 23: integrity constraint violation.
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

/// SQLSTATE class 22: data exception (value too long, numeric overflow).
const DATA_EXCEPTION_CLASS: &str = "22";

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and caller decisions.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - Updating or deleting a row that was already removed
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Entity has no id, so it has never been stored.
    ///
    /// ## When This Occurs
    /// - `update()` or `delete()` on a product that was never created
    #[error("{entity} has not been persisted (id is unset)")]
    NotPersisted { entity: String },

    /// Entity already has an id and cannot be inserted again.
    #[error("{entity} is already persisted with id {id}")]
    AlreadyPersisted { entity: String, id: String },

    /// Field values rejected before reaching the store.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Unique constraint violation.
    #[error("Duplicate value violates {constraint}")]
    UniqueViolation { constraint: String },

    /// Any other integrity constraint (NOT NULL, CHECK, FOREIGN KEY).
    #[error("Constraint {constraint} violated: {message}")]
    ConstraintViolation { constraint: String, message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Server unreachable or refusing connections
    /// - Bad credentials in the connection string
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a NotPersisted error for a given entity type.
    pub fn not_persisted(entity: impl Into<String>) -> Self {
        DbError::NotPersisted {
            entity: entity.into(),
        }
    }

    /// True for every "there is no such row" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. } | DbError::NotPersisted { .. })
    }

    /// True when the data itself was rejected, by validation or by the store.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::Validation(_)
                | DbError::UniqueViolation { .. }
                | DbError::ConstraintViolation { .. }
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → SQLSTATE 23505 → UniqueViolation
///                               SQLSTATE 22xxx → ConstraintViolation
///                               SQLSTATE 23xxx → ConstraintViolation
///                               otherwise      → QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => classify_database_error(
                db_err.code().as_deref().unwrap_or_default(),
                db_err.constraint(),
                db_err.message(),
            ),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Maps a PostgreSQL error report onto a [`DbError`] by its SQLSTATE.
fn classify_database_error(code: &str, constraint: Option<&str>, message: &str) -> DbError {
    // Data exceptions carry no constraint name; the SQLSTATE stands in
    let constraint = constraint.unwrap_or(code).to_string();

    if code == UNIQUE_VIOLATION {
        DbError::UniqueViolation { constraint }
    } else if code.starts_with(INTEGRITY_CONSTRAINT_CLASS) || code.starts_with(DATA_EXCEPTION_CLASS) {
        DbError::ConstraintViolation {
            constraint,
            message: message.to_string(),
        }
    } else {
        DbError::QueryFailed(message.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_categories() {
        assert!(DbError::not_found("Product", 7).is_not_found());
        assert!(DbError::not_persisted("Product").is_not_found());
        assert!(!DbError::PoolExhausted.is_not_found());
    }

    #[test]
    fn test_constraint_categories() {
        let validation: DbError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(validation.is_constraint_violation());
        assert!(DbError::UniqueViolation {
            constraint: "products_pkey".to_string()
        }
        .is_constraint_violation());
        assert!(!DbError::not_found("Product", 1).is_constraint_violation());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DbError::not_found("Product", 42).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            DbError::not_persisted("Product").to_string(),
            "Product has not been persisted (id is unset)"
        );
    }

    #[test]
    fn test_sqlx_mapping() {
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_sqlstate_classification() {
        assert!(matches!(
            classify_database_error("23505", Some("products_pkey"), "duplicate key"),
            DbError::UniqueViolation { constraint } if constraint == "products_pkey"
        ));
        assert!(matches!(
            classify_database_error("23514", Some("products_price_non_negative"), "check"),
            DbError::ConstraintViolation { constraint, .. } if constraint == "products_price_non_negative"
        ));

        // value too long for type character varying(100)
        let too_long = classify_database_error("22001", None, "value too long");
        assert!(too_long.is_constraint_violation());
        assert!(matches!(
            too_long,
            DbError::ConstraintViolation { constraint, .. } if constraint == "22001"
        ));

        assert!(matches!(
            classify_database_error("42P01", None, "relation does not exist"),
            DbError::QueryFailed(_)
        ));
    }
}
