//! UseCase: leaving a conversation room.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConversationId, SessionRepository};

/// Removes a transport from a room's membership set.
pub struct LeaveConversationUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl LeaveConversationUseCase {
    /// Create a new LeaveConversationUseCase
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Leave the room. Idempotent; no error if the transport is not a member.
    pub async fn execute(&self, connection_id: &ConnectionId, conversation_id: &ConversationId) {
        self.repository
            .leave_room(connection_id, conversation_id)
            .await;
    }
}
