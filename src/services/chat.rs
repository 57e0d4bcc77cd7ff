use std::collections::HashMap;

use chrono::Utc;

use crate::models::{ChatMessage, Sender};

/// Per-booking driver chat, append-only and oldest first.
#[derive(Debug, Default)]
pub struct ChatLog {
    threads: HashMap<String, Vec<ChatMessage>>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a staff message. Blank text is ignored and yields `None`.
    pub fn send(&mut self, booking_ref: &str, text: &str) -> Option<&ChatMessage> {
        self.record(booking_ref, Sender::Staff, text)
    }

    pub fn record(&mut self, booking_ref: &str, sender: Sender, text: &str) -> Option<&ChatMessage> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }

        let message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            booking_reference: booking_ref.to_string(),
            sender,
            content: content.to_string(),
            timestamp: Utc::now(),
        };
        tracing::debug!(booking_ref, sender = sender.as_str(), "chat message recorded");

        let thread = self.threads.entry(booking_ref.to_string()).or_default();
        thread.push(message);
        thread.last()
    }

    pub fn history(&self, booking_ref: &str) -> &[ChatMessage] {
        self.threads
            .get(booking_ref)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
