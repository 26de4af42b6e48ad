//! Error types for ID parsing and kind registration.

use thiserror::Error;

/// Errors that can occur when parsing or validating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The ID contains more than one underscore separator.
    #[error("ID contains {count} underscore separators, expected exactly one")]
    TooManySeparators { count: usize },

    /// The prefix or suffix on either side of the separator is empty.
    #[error("ID has an empty {segment} segment")]
    EmptySegment { segment: &'static str },

    /// No kind is registered for the prefix.
    #[error("unknown ID prefix '{0}'")]
    UnknownPrefix(String),

    /// The ID belongs to a different kind than the one parsing it.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix { expected: String, actual: String },

    /// The KSUID portion of the ID is invalid.
    #[error("invalid KSUID: {0}")]
    InvalidKsuid(String),
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix problem.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            IdError::UnknownPrefix(_) | IdError::InvalidPrefix { .. }
        )
    }

    /// Returns true if the string did not split into exactly two parts.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            IdError::Empty
                | IdError::MissingSeparator
                | IdError::TooManySeparators { .. }
                | IdError::EmptySegment { .. }
        )
    }
}

/// Errors reported by strict kind registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The kind name is empty.
    #[error("kind name cannot be empty")]
    EmptyName,

    /// The prefix is empty.
    #[error("kind prefix cannot be empty")]
    EmptyPrefix,

    /// The prefix contains characters that would break the ID format.
    #[error("invalid kind prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: &'static str },

    /// Another kind already owns the prefix.
    #[error("prefix '{prefix}' is already registered to kind '{existing}'")]
    DuplicatePrefix { prefix: String, existing: String },

    /// The validator pattern for the prefix could not be compiled.
    #[error("failed to build validator: {0}")]
    Pattern(#[from] regex::Error),
}
