//! UseCase: connection registration.

use std::sync::Arc;

use crate::domain::{Connection, ConnectionId, SessionRepository};

/// Registers the identity behind a transport and selects the presence
/// broadcast targets.
pub struct RegisterConnectionUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl RegisterConnectionUseCase {
    /// Create a new RegisterConnectionUseCase
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Register (or overwrite) the connection record.
    ///
    /// # Arguments
    ///
    /// * `connection` - The authenticated connection record
    ///
    /// # Returns
    ///
    /// Transports to notify with a `user-connected` event: every live
    /// transport except the registering one
    pub async fn execute(&self, connection: Connection) -> Vec<ConnectionId> {
        let connection_id = connection.id.clone();
        self.repository.register(connection).await;

        self.repository
            .all_attached()
            .await
            .into_iter()
            .filter(|id| *id != connection_id)
            .collect()
    }
}
