//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implementations of the outbound `CoordinatorBackend` port.

mod memory;

pub use memory::InMemoryCoordinator;
