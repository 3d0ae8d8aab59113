use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::conversation::Message;
use crate::formatting::{MISSING, format_date_time, format_relative};

/// Sender name shown when the backend omits the sender.
pub const DEFAULT_SENDER_NAME: &str = "Team";

/// A client-visible message, ready for display.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessageView {
    pub id: String,
    pub sender_name: String,
    /// First letter of the sender name, `?` when unknown.
    pub sender_initial: String,
    /// Project name or conversation subject the message belongs to.
    pub origin: Option<String>,
    pub conversation_id: String,
    pub content: String,
    pub sent: String,
    pub sent_at: String,
}

impl MessageView {
    pub fn new(message: &Message, origin: Option<&str>, now: DateTime<Utc>) -> Self {
        let sender_name = message
            .sender
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(DEFAULT_SENDER_NAME);
        let sender_initial = message
            .sender
            .as_ref()
            .and_then(|s| s.name.chars().next())
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());

        Self {
            id: message.id.clone(),
            sender_name: sender_name.to_string(),
            sender_initial,
            origin: origin.map(str::to_string),
            conversation_id: message.conversation_id.to_string(),
            content: message.content.clone(),
            sent: message
                .created_at
                .map(|at| format_relative(at, now))
                .unwrap_or_else(|| MISSING.to_string()),
            sent_at: format_date_time(message.created_at),
        }
    }
}

pub struct InboxPageData {
    pub messages: Vec<MessageView>,
}
