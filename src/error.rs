use std::fmt;

use thiserror::Error;

/// A single offending field found while checking a create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every offending field of one payload, reported in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        ValidationError { errors }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid create payload: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Raised by the storage layer when a unique constraint is hit,
    /// e.g. a duplicate bus stop code. Never recovered here.
    #[error("uniqueness violation on {constraint}")]
    UniquenessViolation { constraint: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DataError {
    /// Classifies a sqlx insert failure, turning a unique-constraint hit
    /// into [`DataError::UniquenessViolation`] and passing the rest through.
    pub fn from_insert_error(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let constraint = db_err
                    .constraint()
                    .unwrap_or("unique constraint")
                    .to_string();
                return DataError::UniquenessViolation { constraint };
            }
        }
        DataError::Database(err)
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
