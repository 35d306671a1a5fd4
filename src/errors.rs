use sea_orm::error::DbErr;

/// Errors raised by inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

impl ServiceError {
    /// True for errors caused by operator input rather than the store.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Process exit code the shell reports for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_user_error() {
            2
        } else {
            1
        }
    }
}

/// Startup and lifecycle failures: connection and schema.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::DatabaseError(e) => ServiceError::DatabaseError(e),
            other => ServiceError::InternalError(other.to_string()),
        }
    }
}
