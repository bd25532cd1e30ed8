//! UseCase: transport disconnect handling.

use std::sync::Arc;

use crate::domain::{Connection, ConnectionId, SessionRepository};

/// Tears down a transport and selects the disconnect broadcast targets.
pub struct DisconnectConnectionUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl DisconnectConnectionUseCase {
    /// Create a new DisconnectConnectionUseCase
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Detach the transport and clean up its room memberships.
    ///
    /// # Arguments
    ///
    /// * `connection_id` - The closing transport
    ///
    /// # Returns
    ///
    /// The removed connection record and the transports to notify with a
    /// `user-disconnected` event, or None if the transport never
    /// authenticated (room cleanup still happens)
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
    ) -> Option<(Connection, Vec<ConnectionId>)> {
        let connection = self.repository.detach(connection_id).await?;
        let targets = self.repository.all_attached().await;
        Some((connection, targets))
    }
}
