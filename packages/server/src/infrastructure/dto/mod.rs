//! Wire DTOs for the HTTP and WebSocket surfaces.

pub mod http;
pub mod websocket;
