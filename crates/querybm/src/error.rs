//! Error types for querybm

use std::fmt;
use thiserror::Error;

/// Result type alias for querybm operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Boxed error produced by a non-PostgreSQL backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The builder slot of a [`Query`](crate::Query) that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Condition,
    Sort,
    LimitOffset,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Condition => "condition",
            Component::Sort => "sort",
            Component::LimitOffset => "limit-offset",
        })
    }
}

/// Errors reported by [`Builder::validate`](crate::Builder::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A sort item has an empty column name.
    #[error("sort item cannot be empty")]
    EmptySortItem,

    /// A sort list contains a missing entry.
    #[error("sort item cannot be nil")]
    NilSortItem,

    /// Application-defined validation failure.
    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    /// Create an application-defined validation error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Error types for statement building and execution
#[derive(Debug, Error)]
pub enum QueryError {
    /// A builder of the query rejected its own state
    #[error("{component} validation failed: {source}")]
    Validation {
        component: Component,
        #[source]
        source: ValidationError,
    },

    /// A single-row fetch matched nothing
    #[error("no rows in result set")]
    NoRows,

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// PostgreSQL error (prepare, bind or execute)
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),

    /// Error raised by another [`Db`](crate::Db) implementation
    #[error("Driver error: {0}")]
    Driver(#[source] BoxError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl QueryError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Tag a validation failure with the component that produced it
    pub fn validation(component: Component, source: ValidationError) -> Self {
        Self::Validation { component, source }
    }

    /// Wrap an arbitrary backend error
    pub fn driver(err: impl Into<BoxError>) -> Self {
        Self::Driver(err.into())
    }

    /// Check if this is the "no rows" signal of a single-row fetch
    pub fn is_no_rows(&self) -> bool {
        matches!(self, Self::NoRows)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The component that failed validation, if this is a validation error
    pub fn failed_component(&self) -> Option<Component> {
        match self {
            Self::Validation { component, .. } => Some(*component),
            _ => None,
        }
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for QueryError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
