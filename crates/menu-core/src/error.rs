//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid route pattern for {name}: {pattern}")]
    InvalidRoutePattern { name: String, pattern: String },

    #[error("Duplicate route name: {0}")]
    DuplicateRouteName(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
