//! # Domain Layer - Collection Registry
//!
//! Pure types and policies; no I/O.
//!
//! ## Components
//!
//! - `identifier`: `UniqueId` parsing with a nil "unconstrained" sentinel
//! - `metadata`: `MetadataValue` and `CollectionMetadata`
//! - `update_policy`: reset flag + payload resolution (`MetadataUpdate`)
//! - `collection`: `Collection` and the backend inputs built from requests
//! - `status`: `(code, reason)` envelope and the error-kind code table

pub mod collection;
pub mod identifier;
pub mod metadata;
pub mod status;
pub mod update_policy;

pub use collection::*;
pub use identifier::*;
pub use metadata::*;
pub use status::*;
pub use update_policy::*;
