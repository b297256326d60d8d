//! Error handling utilities for repositories

use chalk_core::error::DomainError;
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
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation by the violated constraint name; falls back
/// to a plain database error
pub fn map_unique_by_constraint(
    e: SqlxError,
    mapping: &[(&str, fn() -> DomainError)],
) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(constraint) = db_err.constraint() {
                for (name, make) in mapping {
                    if constraint == *name {
                        return make();
                    }
                }
            }
        }
    }
    DomainError::DatabaseError(e.to_string())
}
