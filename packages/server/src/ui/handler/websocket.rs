//! WebSocket connection handler.
//!
//! One transport maps to one `ConnectionId`, one inbound receive task and
//! one outbound send task draining the per-client channel. Events on a
//! single transport are processed in arrival order; delivery within a room
//! follows relay-call order.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use vakil_shared::time::utc_now_millis;

use crate::{
    domain::{ChatMessage, Connection, ConnectionId, ConnectionIdFactory, ConversationId, UserId, UserRole},
    infrastructure::dto::websocket::{ClientEvent, MessageDto, ServerEvent},
    ui::state::AppState,
    usecase::{
        AnalyzeTextUseCase, BroadcastTypingUseCase, DisconnectConnectionUseCase,
        JoinConversationUseCase, LeaveConversationUseCase, RegisterConnectionUseCase,
        RelayMessageUseCase,
    },
};

/// Queries shorter than this are rejected before analysis
const MIN_ANALYZABLE_LEN: usize = 10;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionIdFactory::generate();
    tracing::info!("transport '{}' connected", connection_id);

    // Create a channel for this client to receive messages
    let (tx, mut rx) = mpsc::unbounded_channel();
    state
        .repository
        .attach(connection_id.clone(), tx, utc_now_millis())
        .await;

    let (mut sender, mut receiver) = socket.split();

    let recv_state = state.clone();
    let recv_connection_id = connection_id.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_event(&recv_state, &recv_connection_id, &text).await;
                }
                Message::Ping(_) => {
                    tracing::trace!("received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("transport '{}' requested close", recv_connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward queued events to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Disconnect side effects run exactly once, after both tasks are done
    let usecase = DisconnectConnectionUseCase::new(state.repository.clone());
    match usecase.execute(&connection_id).await {
        Some((connection, targets)) => {
            let event = ServerEvent::UserDisconnected {
                user_id: connection.user_id.into_string(),
                user_role: connection.role,
            };
            let payload = serde_json::to_string(&event).unwrap();
            state.deliver(&targets, &payload).await;
            tracing::info!("transport '{}' disconnected and unregistered", connection_id);
        }
        None => {
            tracing::info!("transport '{}' closed before authenticating", connection_id);
        }
    }
}

/// Parse and dispatch a single client event.
///
/// A malformed or invalid event is logged and skipped; the transport stays
/// open and unrelated rooms keep flowing.
async fn handle_client_event(state: &Arc<AppState>, connection_id: &ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("unparseable event from '{}': {}", connection_id, e);
            return;
        }
    };

    match event {
        ClientEvent::Authenticate { user_id, user_role } => {
            authenticate(state, connection_id, user_id, user_role).await;
        }
        ClientEvent::JoinConversation { conversation_id } => {
            join_conversation(state, connection_id, conversation_id).await;
        }
        ClientEvent::LeaveConversation { conversation_id } => {
            leave_conversation(state, connection_id, conversation_id).await;
        }
        ClientEvent::SendMessage(message) => {
            send_message(state, message).await;
        }
        ClientEvent::Typing {
            conversation_id,
            is_typing,
            user_id,
        } => {
            typing(state, connection_id, conversation_id, is_typing, user_id).await;
        }
        ClientEvent::AnalyzeMessage {
            conversation_id,
            text,
        } => {
            analyze_message(state, connection_id, conversation_id, text).await;
        }
    }
}

async fn authenticate(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    user_id: String,
    user_role: UserRole,
) {
    let user_id_vo = match UserId::try_from(user_id.clone()) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("invalid user id in authenticate from '{}': {}", connection_id, e);
            return;
        }
    };

    let connection = Connection::new(connection_id.clone(), user_id_vo, user_role);
    let usecase = RegisterConnectionUseCase::new(state.repository.clone());
    let targets = usecase.execute(connection).await;

    let event = ServerEvent::UserConnected { user_id: user_id.clone(), user_role };
    let payload = serde_json::to_string(&event).unwrap();
    state.deliver(&targets, &payload).await;

    tracing::info!(
        "transport '{}' authenticated as '{}' ({})",
        connection_id,
        user_id,
        user_role
    );
}

async fn join_conversation(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    conversation_id: String,
) {
    let conversation = match ConversationId::try_from(conversation_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("invalid join-conversation from '{}': {}", connection_id, e);
            return;
        }
    };

    let usecase = JoinConversationUseCase::new(state.repository.clone());
    usecase.execute(connection_id, &conversation).await;
    tracing::info!("transport '{}' joined conversation '{}'", connection_id, conversation);
}

async fn leave_conversation(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    conversation_id: String,
) {
    let conversation = match ConversationId::try_from(conversation_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("invalid leave-conversation from '{}': {}", connection_id, e);
            return;
        }
    };

    let usecase = LeaveConversationUseCase::new(state.repository.clone());
    usecase.execute(connection_id, &conversation).await;
    tracing::info!("transport '{}' left conversation '{}'", connection_id, conversation);
}

async fn send_message(state: &Arc<AppState>, message: MessageDto) {
    let message = ChatMessage::from(message);
    let usecase = RelayMessageUseCase::new(state.repository.clone());
    let targets = usecase.execute(&message).await;

    if targets.is_empty() {
        tracing::debug!("message '{}' had no recipients", message.id);
        return;
    }

    let payload = serde_json::to_string(&ServerEvent::NewMessage(message.into())).unwrap();
    state.deliver(&targets, &payload).await;
}

async fn typing(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    conversation_id: String,
    is_typing: bool,
    user_id: String,
) {
    let conversation = match ConversationId::try_from(conversation_id.clone()) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("invalid typing event from '{}': {}", connection_id, e);
            return;
        }
    };

    let usecase = BroadcastTypingUseCase::new(state.repository.clone());
    let targets = usecase.execute(&conversation, connection_id).await;

    let event = ServerEvent::Typing {
        conversation_id,
        is_typing,
        user_id: user_id.clone(),
    };
    let payload = serde_json::to_string(&event).unwrap();
    state.deliver(&targets, &payload).await;

    schedule_typing_clear(state, connection_id, &conversation, user_id, is_typing).await;
}

/// Auto-clear a stale typing indicator after the configured window.
///
/// Each `is_typing: true` refreshes the mark; only the task belonging to the
/// latest refresh fires. An explicit `is_typing: false` removes the mark.
async fn schedule_typing_clear(
    state: &Arc<AppState>,
    origin: &ConnectionId,
    conversation: &ConversationId,
    user_id: String,
    is_typing: bool,
) {
    let Some(timeout) = state.typing_timeout else {
        return;
    };
    let key = (conversation.as_str().to_string(), user_id);

    if !is_typing {
        state.typing_marks.lock().await.remove(&key);
        return;
    }

    let mark = Instant::now();
    state.typing_marks.lock().await.insert(key.clone(), mark);

    let state = state.clone();
    let origin = origin.clone();
    let conversation = conversation.clone();
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;

        {
            let mut marks = state.typing_marks.lock().await;
            // A newer typing event superseded this task
            let still_current = matches!(marks.get(&key), Some(latest) if *latest == mark);
            if !still_current {
                return;
            }
            marks.remove(&key);
        }

        let usecase = BroadcastTypingUseCase::new(state.repository.clone());
        let targets = usecase.execute(&conversation, &origin).await;
        let event = ServerEvent::Typing {
            conversation_id: key.0,
            is_typing: false,
            user_id: key.1,
        };
        let payload = serde_json::to_string(&event).unwrap();
        state.deliver(&targets, &payload).await;
    });
}

async fn analyze_message(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    conversation_id: String,
    text: String,
) {
    let conversation = match ConversationId::try_from(conversation_id.clone()) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("invalid analyze-message from '{}': {}", connection_id, e);
            return;
        }
    };

    if text.trim().len() < MIN_ANALYZABLE_LEN {
        let event = ServerEvent::AnalysisFailed {
            conversation_id,
            reason: "Please enter a detailed legal query (at least 10 characters).".to_string(),
        };
        let payload = serde_json::to_string(&event).unwrap();
        state.deliver(std::slice::from_ref(connection_id), &payload).await;
        return;
    }

    // Extraction awaits the external collaborator; run it off the relay path
    // so unrelated rooms keep flowing while the request is in flight.
    let state = state.clone();
    let connection_id = connection_id.clone();
    tokio::spawn(async move {
        let usecase = AnalyzeTextUseCase::new(state.extractor.clone(), state.statutes.clone());
        match usecase.execute(&conversation, &text).await {
            Some(message) => {
                let relay = RelayMessageUseCase::new(state.repository.clone());
                let targets = relay.execute(&message).await;
                let payload =
                    serde_json::to_string(&ServerEvent::NewMessage(message.into())).unwrap();
                state.deliver(&targets, &payload).await;
            }
            None => {
                let event = ServerEvent::AnalysisFailed {
                    conversation_id,
                    reason: "No relevant IPC section found for this query.".to_string(),
                };
                let payload = serde_json::to_string(&event).unwrap();
                state.deliver(&[connection_id], &payload).await;
            }
        }
    });
}
