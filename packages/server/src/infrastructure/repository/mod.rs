//! Repository implementations.
//!
//! Concrete implementations of the domain layer's repository contract. The
//! usecase layer depends on the trait, not on these types (dependency
//! inversion).

pub mod inmemory;

pub use inmemory::InMemorySessionRepository;
