//! UseCase: joining a conversation room.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConversationId, SessionRepository};

/// Adds a transport to a room's membership set.
///
/// Membership is the unit of fan-out scope: a transport must join a room
/// before it receives relay or typing events for that conversation.
pub struct JoinConversationUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl JoinConversationUseCase {
    /// Create a new JoinConversationUseCase
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Join the room. Idempotent; joining twice has no additional effect.
    pub async fn execute(&self, connection_id: &ConnectionId, conversation_id: &ConversationId) {
        self.repository
            .join_room(connection_id, conversation_id)
            .await;
    }
}
