use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingEvent, ChatMessage};
use crate::services::events::publish;
use crate::state::AppState;

fn ensure_booking(state: &AppState, reference: &str) -> Result<(), AppError> {
    if state.store().contains(reference) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("booking {reference}")))
    }
}

// GET /api/bookings/:reference/chat
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    ensure_booking(&state, &reference)?;
    let chat = state.chat();
    Ok(Json(chat.history(&reference).to_vec()))
}

// POST /api/bookings/:reference/chat
#[derive(Deserialize)]
pub struct SendRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ChatMessage>,
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
    Json(body): Json<SendRequest>,
) -> Result<Json<SendResponse>, AppError> {
    ensure_booking(&state, &reference)?;

    let message = {
        let mut chat = state.chat();
        chat.send(&reference, &body.text).cloned()
    };

    if let Some(message) = &message {
        publish(
            &state,
            BookingEvent::Message {
                message: message.clone(),
            },
        );
    }

    Ok(Json(SendResponse {
        sent: message.is_some(),
        message,
    }))
}
