//! UseCase: room-scoped message relay.

use std::sync::Arc;

use crate::domain::{ChatMessage, ConnectionId, ConversationId, SessionRepository};

/// Selects the delivery targets for an inbound message.
///
/// Broadcast semantics: the sender, if a room member, receives its own copy.
/// A missing conversation id or an empty room yields zero targets; both are
/// silent drops, not errors.
pub struct RelayMessageUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl RelayMessageUseCase {
    /// Create a new RelayMessageUseCase
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Compute the target set for `message`.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to relay; never mutated
    ///
    /// # Returns
    ///
    /// Every transport currently joined to the target room
    pub async fn execute(&self, message: &ChatMessage) -> Vec<ConnectionId> {
        let conversation_id = match ConversationId::new(message.conversation_id.clone()) {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!(
                    "dropping message '{}' without a conversation id",
                    message.id
                );
                return Vec::new();
            }
        };

        self.repository.room_members(&conversation_id).await
    }
}
