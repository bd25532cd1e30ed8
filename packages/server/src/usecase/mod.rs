//! UseCase layer.
//!
//! One struct per relay operation, called from the UI layer and operating on
//! the domain layer through the repository contract. Usecases compute the
//! delivery target set; actually writing to sockets stays in the UI layer.

pub mod analyze_text;
pub mod broadcast_typing;
pub mod disconnect_connection;
pub mod join_conversation;
pub mod leave_conversation;
pub mod register_connection;
pub mod relay_message;

pub use analyze_text::AnalyzeTextUseCase;
pub use broadcast_typing::BroadcastTypingUseCase;
pub use disconnect_connection::DisconnectConnectionUseCase;
pub use join_conversation::JoinConversationUseCase;
pub use leave_conversation::LeaveConversationUseCase;
pub use register_connection::RegisterConnectionUseCase;
pub use relay_message::RelayMessageUseCase;
