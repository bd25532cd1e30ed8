//! Vakil relay server.
//!
//! WebSocket relay for the client/lawyer legal-consultation chat: presence,
//! room-scoped message fan-out, typing indicators and the legal analysis
//! feature.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin vakil-server
//! ```

use clap::Parser;

use vakil_server::Config;
use vakil_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = Config::parse();

    // Run the server
    if let Err(e) = vakil_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
