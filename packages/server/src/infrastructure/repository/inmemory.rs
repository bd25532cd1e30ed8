//! In-memory session repository.
//!
//! HashMaps behind tokio locks are the whole store; restart loses all
//! connections and rooms, which is acceptable because every participant's
//! transport is severed with the process. The registry lock is the relay's
//! single serialization point: no concurrent mutation of connection records
//! or membership sets is possible.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::{
    domain::{Connection, ConnectionId, ConversationId, SessionRepository},
    ui::state::ClientInfo,
};

/// Registry state guarded by a single lock.
#[derive(Default)]
struct RegistryInner {
    /// Authenticated identity per transport
    connections: HashMap<ConnectionId, Connection>,
    /// Room membership sets; an absent key is an empty room
    rooms: HashMap<ConversationId, HashSet<ConnectionId>>,
}

/// In-memory implementation of the session repository.
///
/// The outbound channel map is shared with the UI layer's `AppState` so
/// delivery loops can reach every live transport.
pub struct InMemorySessionRepository {
    /// Outbound channels per live transport (shared with AppState)
    connected_clients: Arc<Mutex<HashMap<String, ClientInfo>>>,
    /// Identities and room membership
    inner: Mutex<RegistryInner>,
}

impl InMemorySessionRepository {
    /// Create a new InMemorySessionRepository
    pub fn new(connected_clients: Arc<Mutex<HashMap<String, ClientInfo>>>) -> Self {
        Self {
            connected_clients,
            inner: Mutex::new(RegistryInner::default()),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn attach(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: i64,
    ) {
        let mut clients = self.connected_clients.lock().await;
        clients.insert(
            connection_id.into_string(),
            ClientInfo {
                sender,
                connected_at,
            },
        );
    }

    async fn detach(&self, connection_id: &ConnectionId) -> Option<Connection> {
        {
            let mut clients = self.connected_clients.lock().await;
            clients.remove(connection_id.as_str());
        }

        let mut inner = self.inner.lock().await;
        // Membership sets must never hold dead transports; empty rooms vanish
        inner.rooms.retain(|_, members| {
            members.remove(connection_id);
            !members.is_empty()
        });
        inner.connections.remove(connection_id)
    }

    async fn register(&self, connection: Connection) {
        let mut inner = self.inner.lock().await;
        inner.connections.insert(connection.id.clone(), connection);
    }

    async fn find(&self, connection_id: &ConnectionId) -> Option<Connection> {
        let inner = self.inner.lock().await;
        inner.connections.get(connection_id).cloned()
    }

    async fn join_room(&self, connection_id: &ConnectionId, conversation_id: &ConversationId) {
        let mut inner = self.inner.lock().await;
        inner
            .rooms
            .entry(conversation_id.clone())
            .or_default()
            .insert(connection_id.clone());
    }

    async fn leave_room(&self, connection_id: &ConnectionId, conversation_id: &ConversationId) {
        let mut inner = self.inner.lock().await;
        if let Some(members) = inner.rooms.get_mut(conversation_id) {
            members.remove(connection_id);
            if members.is_empty() {
                inner.rooms.remove(conversation_id);
            }
        }
    }

    async fn room_members(&self, conversation_id: &ConversationId) -> Vec<ConnectionId> {
        let inner = self.inner.lock().await;
        inner
            .rooms
            .get(conversation_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn all_attached(&self) -> Vec<ConnectionId> {
        let clients = self.connected_clients.lock().await;
        clients
            .keys()
            .filter_map(|id| ConnectionId::new(id.clone()).ok())
            .collect()
    }

    async fn count_registered(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserId, UserRole};
    use tokio::sync::mpsc;

    fn create_test_repository() -> InMemorySessionRepository {
        let connected_clients = Arc::new(Mutex::new(HashMap::new()));
        InMemorySessionRepository::new(connected_clients)
    }

    fn conn_id(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    fn conv_id(id: &str) -> ConversationId {
        ConversationId::new(id.to_string()).unwrap()
    }

    fn connection(id: &str, user_id: &str, role: UserRole) -> Connection {
        Connection::new(
            conn_id(id),
            UserId::new(user_id.to_string()).unwrap(),
            role,
        )
    }

    #[tokio::test]
    async fn test_attach_tracks_transport() {
        // given:
        let repo = create_test_repository();
        let (tx, _rx) = mpsc::unbounded_channel();

        // when:
        repo.attach(conn_id("a"), tx, 1000).await;

        // then: visible as attached, but not yet registered
        assert_eq!(repo.all_attached().await, vec![conn_id("a")]);
        assert_eq!(repo.count_registered().await, 0);
    }

    #[tokio::test]
    async fn test_register_and_find() {
        // given:
        let repo = create_test_repository();
        let (tx, _rx) = mpsc::unbounded_channel();
        repo.attach(conn_id("a"), tx, 0).await;

        // when:
        repo.register(connection("a", "u1", UserRole::Client)).await;

        // then:
        let found = repo.find(&conn_id("a")).await.unwrap();
        assert_eq!(found.user_id.as_str(), "u1");
        assert_eq!(repo.count_registered().await, 1);
    }

    #[tokio::test]
    async fn test_register_overwrites_by_connection_id() {
        // given:
        let repo = create_test_repository();
        repo.register(connection("a", "u1", UserRole::Client)).await;

        // when:
        repo.register(connection("a", "u2", UserRole::Lawyer)).await;

        // then: one record, last write wins
        assert_eq!(repo.count_registered().await, 1);
        assert_eq!(
            repo.find(&conn_id("a")).await.unwrap().user_id.as_str(),
            "u2"
        );
    }

    #[tokio::test]
    async fn test_detach_returns_registered_connection() {
        // given:
        let repo = create_test_repository();
        let (tx, _rx) = mpsc::unbounded_channel();
        repo.attach(conn_id("a"), tx, 0).await;
        repo.register(connection("a", "u1", UserRole::Client)).await;

        // when:
        let removed = repo.detach(&conn_id("a")).await;

        // then: record returned once, everything cleaned up
        assert_eq!(removed.unwrap().user_id.as_str(), "u1");
        assert!(repo.all_attached().await.is_empty());
        assert_eq!(repo.count_registered().await, 0);
        assert!(repo.detach(&conn_id("a")).await.is_none());
    }

    #[tokio::test]
    async fn test_detach_unregistered_transport_returns_none() {
        // given: attached but never authenticated
        let repo = create_test_repository();
        let (tx, _rx) = mpsc::unbounded_channel();
        repo.attach(conn_id("a"), tx, 0).await;

        // when:
        let removed = repo.detach(&conn_id("a")).await;

        // then:
        assert!(removed.is_none());
        assert!(repo.all_attached().await.is_empty());
    }

    #[tokio::test]
    async fn test_detach_removes_all_room_memberships() {
        // given: one transport in two rooms, another sharing one of them
        let repo = create_test_repository();
        let (tx_a, _rx_a) = mpsc::unbounded_channel();
        let (tx_b, _rx_b) = mpsc::unbounded_channel();
        repo.attach(conn_id("a"), tx_a, 0).await;
        repo.attach(conn_id("b"), tx_b, 0).await;
        repo.join_room(&conn_id("a"), &conv_id("c1")).await;
        repo.join_room(&conn_id("a"), &conv_id("c2")).await;
        repo.join_room(&conn_id("b"), &conv_id("c1")).await;

        // when:
        repo.detach(&conn_id("a")).await;

        // then: "a" is gone everywhere, "b" is unaffected
        assert_eq!(repo.room_members(&conv_id("c1")).await, vec![conn_id("b")]);
        assert!(repo.room_members(&conv_id("c2")).await.is_empty());
    }

    #[tokio::test]
    async fn test_join_room_is_idempotent() {
        // given:
        let repo = create_test_repository();

        // when: the same transport joins twice
        repo.join_room(&conn_id("a"), &conv_id("c1")).await;
        repo.join_room(&conn_id("a"), &conv_id("c1")).await;

        // then:
        assert_eq!(repo.room_members(&conv_id("c1")).await.len(), 1);
    }

    #[tokio::test]
    async fn test_leave_room_is_idempotent() {
        // given:
        let repo = create_test_repository();
        repo.join_room(&conn_id("a"), &conv_id("c1")).await;

        // when: leaving twice, the second time from an absent room
        repo.leave_room(&conn_id("a"), &conv_id("c1")).await;
        repo.leave_room(&conn_id("a"), &conv_id("c1")).await;

        // then: no error, room is gone
        assert!(repo.room_members(&conv_id("c1")).await.is_empty());
    }

    #[tokio::test]
    async fn test_room_members_unknown_room_is_empty() {
        // given:
        let repo = create_test_repository();

        // when:
        let members = repo.room_members(&conv_id("never-created")).await;

        // then: absence of a key is equivalent to an empty room
        assert!(members.is_empty());
    }
}
