//! Error types for the Collection Registry
//!
//! Every failure carries an [`ErrorKind`] tag. Callers and the status mapper
//! compare errors by kind, never by message or value identity.

use thiserror::Error;

/// Field-less tag for a [`RegistryError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IdentifierFormat,
    InvalidMetadataUpdate,
    UniqueConstraintViolation,
    NotFound,
    MetadataConversion,
    Backend,
    Internal,
}

/// Collection Registry errors
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistryError {
    /// Identifier string is not a valid UUID
    #[error("collection id format error: {raw:?}")]
    IdentifierFormat { raw: String },

    /// Reset flag and metadata payload were both supplied
    #[error("invalid metadata update: reset_metadata is true and metadata is not empty")]
    InvalidMetadataUpdate,

    /// A live collection already uses this name
    #[error("collection already exists: {name}")]
    UniqueConstraintViolation { name: String },

    /// Target collection does not exist
    #[error("collection not found: {id}")]
    NotFound { id: String },

    /// Wire metadata entry could not be converted
    #[error("metadata conversion error for key {key:?}: {reason}")]
    MetadataConversion { key: String, reason: String },

    /// Opaque failure reported by the coordinator backend
    #[error("backend error: {reason}")]
    Backend { reason: String },

    /// Backend broke one of its own invariants
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl RegistryError {
    /// Tag used for status mapping and comparisons.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IdentifierFormat { .. } => ErrorKind::IdentifierFormat,
            Self::InvalidMetadataUpdate => ErrorKind::InvalidMetadataUpdate,
            Self::UniqueConstraintViolation { .. } => ErrorKind::UniqueConstraintViolation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MetadataConversion { .. } => ErrorKind::MetadataConversion,
            Self::Backend { .. } => ErrorKind::Backend,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
