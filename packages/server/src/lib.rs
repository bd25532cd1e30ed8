//! Vakil relay server library.
//!
//! Real-time WebSocket relay for a client/lawyer legal-consultation chat:
//! connection registry, room-scoped message fan-out, presence and typing
//! propagation, plus a keyword-to-statute legal analysis feature backed by a
//! static Indian Penal Code reference table.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::Config;
pub use ui::run;
