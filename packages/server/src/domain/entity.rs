//! Core domain models for the relay.

use super::value_object::{ConnectionId, UserId, UserRole};

/// One live transport session bound to a participant identity.
///
/// Created when the transport authenticates, destroyed on transport close.
/// A connection belongs to exactly one user_id/role pair for its lifetime;
/// re-authentication on the same transport overwrites the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Transport session identifier
    pub id: ConnectionId,
    /// Identity of the participant behind the transport
    pub user_id: UserId,
    /// Role of the participant
    pub role: UserRole,
}

impl Connection {
    /// Create a new connection record
    pub fn new(id: ConnectionId, user_id: UserId, role: UserRole) -> Self {
        Self { id, user_id, role }
    }
}

/// A chat message as it travels through the relay.
///
/// Immutable once constructed; the relay forwards it by value and never
/// mutates it in transit. `conversation_id` alone determines routing scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub content: String,
    /// RFC 3339 timestamp, set by the sender and passed through verbatim
    pub timestamp: String,
    /// Set on synthetic messages produced by the analysis feature
    pub is_ai: Option<bool>,
    pub attachments: Option<Vec<Attachment>>,
}

/// File attachment metadata carried inside a message.
///
/// Opaque to the relay; round-tripped without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub url: String,
    pub kind: String,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_new() {
        // given:
        let id = ConnectionId::new("conn-1".to_string()).unwrap();
        let user_id = UserId::new("u1".to_string()).unwrap();

        // when:
        let connection = Connection::new(id.clone(), user_id.clone(), UserRole::Client);

        // then:
        assert_eq!(connection.id, id);
        assert_eq!(connection.user_id, user_id);
        assert_eq!(connection.role, UserRole::Client);
    }
}
