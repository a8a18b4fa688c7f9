//! Integration flows against the RPC handler and in-memory coordinator.

pub mod get_or_create_race;
pub mod lifecycle;
