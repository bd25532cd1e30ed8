//! Domain factories for generating identifiers.

use super::ConnectionId;

/// Factory for generating ConnectionId instances.
///
/// Encapsulates identifier generation, separating it from the validation
/// logic in ConnectionId. One id is generated per socket upgrade.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId from a random UUID v4.
    pub fn generate() -> ConnectionId {
        let uuid = uuid::Uuid::new_v4();
        // A UUID string is never empty, so validation cannot fail here
        ConnectionId::new(uuid.to_string()).unwrap_or_else(|_| unreachable!())
    }
}

/// Factory for generating message identifiers.
///
/// Used for synthetic messages produced server-side; client messages arrive
/// with their ids already set.
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// Generate a new message id from a random UUID v4.
    pub fn generate() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
