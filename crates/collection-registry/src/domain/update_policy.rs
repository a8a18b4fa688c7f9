//! Metadata update policy.
//!
//! An update request carries a `reset_metadata` flag and an optional payload.
//! The four combinations resolve as follows:
//!
//! | reset_metadata | payload | Outcome |
//! |----------------|---------|---------|
//! | true           | absent  | [`MetadataUpdate::Reset`] |
//! | true           | present | rejected with `InvalidMetadataUpdate` |
//! | false          | present | [`MetadataUpdate::Replace`] (full replace, no merge) |
//! | false          | absent  | [`MetadataUpdate::Unchanged`] |

use super::metadata::CollectionMetadata;
use crate::error::{RegistryError, RegistryResult};

/// Resolved metadata change for a single update.
///
/// Generic over the payload so the policy can run on the wire form before
/// any conversion work happens.
#[derive(Clone, Debug, PartialEq)]
pub enum MetadataUpdate<M = CollectionMetadata> {
    /// Keep whatever metadata is stored.
    Unchanged,
    /// Replace stored metadata with this mapping.
    Replace(M),
    /// Drop all stored metadata.
    Reset,
}

impl<M> MetadataUpdate<M> {
    /// Resolve the reset flag and payload into a single outcome.
    ///
    /// # Errors
    /// - `InvalidMetadataUpdate` when the flag is set and a payload is present
    pub fn resolve(reset_metadata: bool, metadata: Option<M>) -> RegistryResult<Self> {
        match (reset_metadata, metadata) {
            (true, None) => Ok(Self::Reset),
            (true, Some(_)) => Err(RegistryError::InvalidMetadataUpdate),
            (false, Some(metadata)) => Ok(Self::Replace(metadata)),
            (false, None) => Ok(Self::Unchanged),
        }
    }

    /// Convert the payload of a `Replace`, leaving the other outcomes as-is.
    pub fn try_map<N, E>(self, f: impl FnOnce(M) -> Result<N, E>) -> Result<MetadataUpdate<N>, E> {
        Ok(match self {
            Self::Unchanged => MetadataUpdate::Unchanged,
            Self::Replace(m) => MetadataUpdate::Replace(f(m)?),
            Self::Reset => MetadataUpdate::Reset,
        })
    }
}

impl MetadataUpdate<CollectionMetadata> {
    /// Metadata that results from applying this update to `current`.
    pub fn apply(self, current: Option<CollectionMetadata>) -> Option<CollectionMetadata> {
        match self {
            Self::Unchanged => current,
            Self::Replace(metadata) => Some(metadata),
            Self::Reset => None,
        }
    }
}
