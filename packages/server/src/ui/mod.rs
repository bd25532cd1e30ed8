//! UI layer: HTTP/WebSocket endpoints and the server runtime.

pub mod handler;
pub mod runner;
mod signal;
pub mod state;

pub use runner::{ServerError, run};
