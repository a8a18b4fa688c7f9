//! # RPC Layer - Collection Registry
//!
//! - `payloads`: wire request/response types
//! - `codec`: wire <-> domain metadata and collection conversion
//! - `handler`: entry points that funnel every outcome into a `Status`

pub mod codec;
pub mod handler;
pub mod payloads;

pub use codec::*;
pub use handler::*;
pub use payloads::*;
