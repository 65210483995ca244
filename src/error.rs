use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Conflict on {entity}: {detail}")]
    Conflict { entity: &'static str, detail: String },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),
}

impl StoreError {
    /// Map a raw engine error raised while writing `entity`.
    ///
    /// Unique constraint violations become `Conflict`; anything else stays a
    /// storage failure.
    pub fn classify(entity: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Conflict { entity, detail },
            _ => StoreError::Storage(err),
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        StoreError::NotFound { entity, id }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Emit the failure at the level matching its kind.
    pub(crate) fn log(&self, operation: &str) {
        match self {
            StoreError::Conflict { .. } | StoreError::NotFound { .. } => {
                tracing::warn!("{} rejected: {}", operation, self)
            }
            StoreError::Storage(e) => tracing::error!("{} failed: {:?}", operation, e),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_errors_stay_storage() {
        let err = StoreError::classify("user", DbErr::Custom("engine unavailable".to_string()));
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(!err.is_conflict());
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = StoreError::not_found("category", 7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "category with id 7 not found");
    }

    #[test]
    fn conflict_message() {
        let err = StoreError::Conflict {
            entity: "user",
            detail: "UNIQUE constraint failed: users.username".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Conflict on user: UNIQUE constraint failed: users.username"
        );
    }
}
