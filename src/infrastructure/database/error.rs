//! Translation of `sqlx` failures into the repository error taxonomy.

use sqlx::error::ErrorKind;

use crate::shared::error::RepositoryError;

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => RepositoryError::AlreadyExists,
                ErrorKind::NotNullViolation => RepositoryError::InvalidInput,
                ErrorKind::ForeignKeyViolation => RepositoryError::Conflict,
                _ => RepositoryError::Internal,
            },
            _ => RepositoryError::Internal,
        };

        // The sqlx value is dropped here, so this is the last chance to record it.
        if kind == RepositoryError::Internal {
            tracing::error!(error = %err, "storage failure");
        } else {
            tracing::debug!(error = %err, kind = %kind, "storage error translated");
        }

        kind
    }
}
