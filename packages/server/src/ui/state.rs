//! Server state and connection bookkeeping.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, mpsc};

use crate::config::Config;
use crate::domain::{ConnectionId, KeywordExtractor, SessionRepository, StatuteTable};
use crate::infrastructure::hf::{HfClient, HfError};
use crate::infrastructure::repository::InMemorySessionRepository;
use crate::infrastructure::statutes::statute_table;

/// Per-transport delivery channel.
pub struct ClientInfo {
    /// Message sender channel, drained by the transport's send task
    pub sender: mpsc::UnboundedSender<String>,
    /// Unix timestamp when the transport opened (milliseconds, UTC)
    pub connected_at: i64,
}

/// Shared application state.
pub struct AppState {
    /// Registry of transports, identities and room membership
    pub repository: Arc<dyn SessionRepository>,
    /// Outbound channels per live transport (shared with the repository)
    pub connected_clients: Arc<Mutex<HashMap<String, ClientInfo>>>,
    /// Keyword extraction collaborator for the analysis feature
    pub extractor: Arc<dyn KeywordExtractor>,
    /// Fixed statute reference table
    pub statutes: Arc<StatuteTable>,
    /// Upstream client behind /api/ipc-search
    pub hf: Arc<HfClient>,
    /// Optional stale-typing auto-clear window
    pub typing_timeout: Option<Duration>,
    /// Last refresh instant per (conversation_id, user_id) typing mark
    pub typing_marks: Mutex<HashMap<(String, String), Instant>>,
}

impl AppState {
    /// Build the state graph from the server configuration.
    pub fn new(config: &Config) -> Result<Self, HfError> {
        let connected_clients = Arc::new(Mutex::new(HashMap::new()));
        let repository = Arc::new(InMemorySessionRepository::new(connected_clients.clone()));
        let hf = Arc::new(HfClient::new(config)?);
        let extractor: Arc<dyn KeywordExtractor> = hf.clone();

        Ok(Self {
            repository,
            connected_clients,
            extractor,
            statutes: Arc::new(statute_table()),
            hf,
            typing_timeout: config.typing_timeout_secs.map(Duration::from_secs),
            typing_marks: Mutex::new(HashMap::new()),
        })
    }

    /// Deliver a serialized event to the given transports.
    ///
    /// Fire-and-forget: a transport whose channel is already closed is
    /// logged and skipped, never an error for the remaining targets.
    pub async fn deliver(&self, targets: &[ConnectionId], payload: &str) {
        let clients = self.connected_clients.lock().await;
        for target in targets {
            if let Some(info) = clients.get(target.as_str())
                && info.sender.send(payload.to_string()).is_err()
            {
                tracing::warn!("failed to deliver event to connection '{target}'");
            }
        }
    }
}
