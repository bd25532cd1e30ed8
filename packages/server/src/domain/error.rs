//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// UserId validation error
    #[error("UserId cannot be empty")]
    UserIdEmpty,

    /// UserId too long error
    #[error("UserId cannot exceed {max} characters (got {actual})")]
    UserIdTooLong { max: usize, actual: usize },

    /// ConversationId validation error
    #[error("ConversationId cannot be empty")]
    ConversationIdEmpty,

    /// ConversationId too long error
    #[error("ConversationId cannot exceed {max} characters (got {actual})")]
    ConversationIdTooLong { max: usize, actual: usize },
}
