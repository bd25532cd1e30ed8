//! UseCase: typing indicator broadcast.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConversationId, SessionRepository};

/// Selects the delivery targets for a typing indicator.
///
/// The inverse of message relay semantics: other room members only, never
/// the typer. The typing boolean itself is passed through stateless.
pub struct BroadcastTypingUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl BroadcastTypingUseCase {
    /// Create a new BroadcastTypingUseCase
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Compute the target set for a typing event.
    ///
    /// # Arguments
    ///
    /// * `conversation_id` - The room the indicator is scoped to
    /// * `origin` - The typer's transport, excluded from delivery
    ///
    /// # Returns
    ///
    /// Every other transport joined to the room
    pub async fn execute(
        &self,
        conversation_id: &ConversationId,
        origin: &ConnectionId,
    ) -> Vec<ConnectionId> {
        self.repository
            .room_members(conversation_id)
            .await
            .into_iter()
            .filter(|id| id != origin)
            .collect()
    }
}
