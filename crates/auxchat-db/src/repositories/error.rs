//! Error handling utilities for repositories

use auxchat_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for a foreign key violation (referenced row vanished) or fall back
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing();
        }
    }
    map_db_error(e)
}

/// SQLSTATE for `numeric_value_out_of_range`
const NUMERIC_OUT_OF_RANGE: &str = "22003";

/// Check for an integer overflow in the statement or fall back
pub fn map_out_of_range<F>(e: SqlxError, on_overflow: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(NUMERIC_OUT_OF_RANGE) {
            return on_overflow();
        }
    }
    map_db_error(e)
}
