//! Telegram webhook handler
//!
//! Decodes an update, hands its text message to the expense service and
//! always acknowledges decodable updates with 200 so Telegram does not
//! redeliver them.

use application::IncomingMessage;
use axum::{Json, body::Bytes, extract::State};
use integration_telegram::{TextMessage, Update};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub status: String,
}

impl WebhookResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

fn to_incoming(message: TextMessage) -> IncomingMessage {
    IncomingMessage {
        sender_name: message.sender_name,
        chat_id: message.chat_id,
        message_id: message.message_id,
        text: message.text,
    }
}

/// Telegram webhook update handler (POST)
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let update: Update = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejecting undecodable webhook body");
        ApiError::BadRequest(format!("Invalid update payload: {e}"))
    })?;

    let Some(message) = update.text_message() else {
        debug!(update_id = update.update_id, "Update carries no text message, ignoring");
        return Ok(Json(WebhookResponse::ok()));
    };

    match state
        .expense_service
        .handle_message(&to_incoming(message))
        .await
    {
        Ok(outcome) => info!(update_id = update.update_id, ?outcome, "Update processed"),
        Err(e) => error!(update_id = update.update_id, error = %e, "Failed to process update"),
    }

    Ok(Json(WebhookResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_message_maps_field_for_field() {
        let incoming = to_incoming(TextMessage {
            sender_name: "alice".to_string(),
            chat_id: 10,
            message_id: 20,
            text: "5b".to_string(),
        });

        assert_eq!(incoming.sender_name, "alice");
        assert_eq!(incoming.chat_id, 10);
        assert_eq!(incoming.message_id, 20);
        assert_eq!(incoming.text, "5b");
    }

    #[test]
    fn ok_response_serialization() {
        let json = serde_json::to_value(WebhookResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }
}
