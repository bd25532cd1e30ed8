//! Session repository contract.
//!
//! The UI and usecase layers depend on this trait; the concrete in-memory
//! implementation lives in the infrastructure layer (dependency inversion).
//! All mutations are serialized behind the implementation's lock, which is
//! the relay's single dispatch point.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    entity::Connection,
    value_object::{ConnectionId, ConversationId},
};

/// Registry of live transports, authenticated identities and room membership.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Track a newly opened transport and its outbound channel.
    async fn attach(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: i64,
    );

    /// Drop a transport: outbound channel, registry entry and every room
    /// membership. Returns the registered Connection if the transport ever
    /// authenticated, so disconnect side effects run exactly once.
    async fn detach(&self, connection_id: &ConnectionId) -> Option<Connection>;

    /// Register (or overwrite) the identity behind a transport.
    ///
    /// No uniqueness is enforced on the user id; concurrent transports of the
    /// same user are tracked independently.
    async fn register(&self, connection: Connection);

    /// Look up the identity behind a transport.
    async fn find(&self, connection_id: &ConnectionId) -> Option<Connection>;

    /// Add a transport to a room. Idempotent; the room is created implicitly
    /// on first join.
    async fn join_room(&self, connection_id: &ConnectionId, conversation_id: &ConversationId);

    /// Remove a transport from a room. Idempotent; no error if absent. A room
    /// whose last member leaves vanishes.
    async fn leave_room(&self, connection_id: &ConnectionId, conversation_id: &ConversationId);

    /// Members of a room. An unknown conversation id is an empty room.
    async fn room_members(&self, conversation_id: &ConversationId) -> Vec<ConnectionId>;

    /// All live transports, authenticated or not.
    async fn all_attached(&self) -> Vec<ConnectionId>;

    /// Number of authenticated connections.
    async fn count_registered(&self) -> usize;
}
