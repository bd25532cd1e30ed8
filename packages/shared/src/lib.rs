//! Shared utilities for Vakil.
//!
//! Cross-cutting concerns used by every binary in the workspace: tracing
//! setup and timestamp helpers.

pub mod logger;
pub mod time;
