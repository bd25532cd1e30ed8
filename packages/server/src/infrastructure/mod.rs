//! Infrastructure layer.
//!
//! Concrete implementations of the domain contracts plus wire DTOs: the
//! in-memory session repository, the Hugging Face upstream client and the
//! static statute reference data.

pub mod dto;
pub mod hf;
pub mod repository;
pub mod statutes;
