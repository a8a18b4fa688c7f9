//! Collection identifiers.
//!
//! A `UniqueId` wraps a UUID. The nil UUID doubles as the "unconstrained"
//! sentinel used by lookup filters, so an absent wire id and a parse failure
//! stay distinguishable.

use crate::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil sentinel.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse a required identifier.
    ///
    /// # Errors
    /// - `IdentifierFormat` if `raw` is not a valid UUID (including `""`)
    pub fn parse(raw: &str) -> RegistryResult<Self> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| RegistryError::IdentifierFormat {
                raw: raw.to_string(),
            })
    }

    /// Parse an optional identifier; absence yields [`UniqueId::nil`].
    pub fn parse_optional(raw: Option<&str>) -> RegistryResult<Self> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Ok(Self::nil()),
        }
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<Uuid> for UniqueId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
