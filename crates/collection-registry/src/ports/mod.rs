//! Ports layer for the Collection Registry.
//!
//! - Inbound (Driving): `CollectionRegistryApi`, called by the RPC handler
//! - Outbound (Driven): `CoordinatorBackend`, the external persistence engine

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
