use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed row does not exist.
    #[error("entity not found")]
    NotFound,
    /// A unique, foreign-key or check constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// The submitted data does not fit rows already stored.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// A stored row could not be decoded into its domain type.
    #[error("corrupt row: {0}")]
    CorruptRow(String),
    /// No connection could be obtained.
    #[error("connection error: {0}")]
    Connection(String),
    /// Anything else reported by the database driver.
    #[error("unexpected database error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation
                | DatabaseErrorKind::NotNullViolation,
                info,
            ) => RepositoryError::ConstraintViolation(info.message().to_string()),
            other => RepositoryError::Unexpected(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::CorruptRow(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_not_found() {
        assert!(matches!(
            RepositoryError::from(DieselError::NotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn maps_rollback_to_unexpected() {
        assert!(matches!(
            RepositoryError::from(DieselError::RollbackTransaction),
            RepositoryError::Unexpected(_)
        ));
    }

    #[test]
    fn decode_failures_are_not_validation_errors() {
        let err = RepositoryError::from(TypeConstraintError::InvalidDecimal("price"));
        assert!(matches!(err, RepositoryError::CorruptRow(_)));
    }
}
