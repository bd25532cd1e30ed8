//! WebSocket event DTOs.
//!
//! Wire format mirrors the browser client: a kebab-case `type` tag with
//! camelCase payload fields. Messages round-trip without loss of fields.

use serde::{Deserialize, Serialize};

use crate::domain::{Attachment, ChatMessage, UserRole};

/// A chat message on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_role: UserRole,
    pub content: String,
    pub timestamp: String,
    #[serde(rename = "isAI", default, skip_serializing_if = "Option::is_none")]
    pub is_ai: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentDto>>,
}

/// File attachment metadata on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentDto {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
}

/// Events a client sends to the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    /// Bind a participant identity to this transport
    Authenticate {
        user_id: String,
        user_role: UserRole,
    },
    /// Start receiving events scoped to a conversation
    JoinConversation { conversation_id: String },
    /// Stop receiving events scoped to a conversation
    LeaveConversation { conversation_id: String },
    /// Relay a message to the target room
    SendMessage(MessageDto),
    /// Propagate a typing indicator to the other room members
    Typing {
        conversation_id: String,
        is_typing: bool,
        user_id: String,
    },
    /// Run the legal analysis feature against free text
    AnalyzeMessage {
        conversation_id: String,
        text: String,
    },
}

/// Events the relay sends to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// A participant authenticated somewhere on the relay
    UserConnected {
        user_id: String,
        user_role: UserRole,
    },
    /// A participant's transport closed
    UserDisconnected {
        user_id: String,
        user_role: UserRole,
    },
    /// A message addressed to a room this transport joined
    NewMessage(MessageDto),
    /// Another member of a joined room is (or stopped) typing
    Typing {
        conversation_id: String,
        is_typing: bool,
        user_id: String,
    },
    /// The analysis request of this transport produced no result
    AnalysisFailed {
        conversation_id: String,
        reason: String,
    },
}

impl From<MessageDto> for ChatMessage {
    fn from(dto: MessageDto) -> Self {
        ChatMessage {
            id: dto.id,
            conversation_id: dto.conversation_id,
            sender_id: dto.sender_id,
            sender_name: dto.sender_name,
            sender_role: dto.sender_role,
            content: dto.content,
            timestamp: dto.timestamp,
            is_ai: dto.is_ai,
            attachments: dto
                .attachments
                .map(|list| list.into_iter().map(Attachment::from).collect()),
        }
    }
}

impl From<ChatMessage> for MessageDto {
    fn from(message: ChatMessage) -> Self {
        MessageDto {
            id: message.id,
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            sender_name: message.sender_name,
            sender_role: message.sender_role,
            content: message.content,
            timestamp: message.timestamp,
            is_ai: message.is_ai,
            attachments: message
                .attachments
                .map(|list| list.into_iter().map(AttachmentDto::from).collect()),
        }
    }
}

impl From<AttachmentDto> for Attachment {
    fn from(dto: AttachmentDto) -> Self {
        Attachment {
            id: dto.id,
            name: dto.name,
            url: dto.url,
            kind: dto.kind,
            size: dto.size,
        }
    }
}

impl From<Attachment> for AttachmentDto {
    fn from(attachment: Attachment) -> Self {
        AttachmentDto {
            id: attachment.id,
            name: attachment.name,
            url: attachment.url,
            kind: attachment.kind,
            size: attachment.size,
        }
    }
}
