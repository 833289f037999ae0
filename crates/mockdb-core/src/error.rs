//! Error types for MockDB Core

use thiserror::Error;

/// Result type alias using MockDB's Error
pub type Result<T> = std::result::Result<T, Error>;

/// MockDB error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Relational property \"{model}.{field}\" has no initial value")]
    MissingRelationValue { model: String, field: String },
}
