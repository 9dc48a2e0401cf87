//! Error types for the factory recipes.

use thiserror::Error;

/// Errors that can occur while resolving a discriminator into a game object.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The text does not name any [`ObjectType`](super::ObjectType).
    #[error("Unknown object type: {0}")]
    UnknownType(String),

    /// No creator is registered under this key.
    #[error("No creator registered for {0:?}")]
    Unregistered(String),

    /// A spawn list names a key with no registered creator.
    #[error("Spawn list line {line}: no creator registered for {key:?}")]
    UnknownInManifest { line: usize, key: String },

    /// The spawn list could not be read.
    #[error("Failed to read spawn list: {0}")]
    Io(#[from] std::io::Error),
}
