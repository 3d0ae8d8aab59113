use serde::{Deserialize, Serialize};

use crate::domain::types::{ConversationId, ProjectId, Timestamp};

/// Title used when a conversation has neither a subject nor a project.
pub const DEFAULT_CONVERSATION_TITLE: &str = "Conversation";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageSender {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub conversation_id: ConversationId,
    pub sender_id: String,
    pub sender: Option<MessageSender>,
    pub content: String,
    pub is_internal: bool,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectBrief {
    pub id: ProjectId,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub project_id: ProjectId,
    pub subject: Option<String>,
    pub status: String,
    pub status_id: i32,
    pub project: Option<ProjectBrief>,
    /// `None` when the backend did not embed the messages.
    pub messages: Option<Vec<Message>>,
    pub message_count: u32,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub last_message_at: Option<Timestamp>,
}

impl Conversation {
    /// Subject, falling back to the project name, then to a generic title.
    pub fn title(&self) -> &str {
        self.subject
            .as_deref()
            .or(self.project.as_ref().map(|p| p.name.as_str()))
            .unwrap_or(DEFAULT_CONVERSATION_TITLE)
    }

    /// Label attached to inbox entries: project name first, then subject.
    pub fn origin(&self) -> Option<&str> {
        self.project
            .as_ref()
            .map(|p| p.name.as_str())
            .or(self.subject.as_deref())
    }
}

/// Conversation as embedded in an engagement.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub subject: Option<String>,
    pub status: String,
    pub message_count: u32,
    pub last_message_at: Option<Timestamp>,
}

/// Messages visible to the client.
pub fn public_messages(messages: &[Message]) -> Vec<&Message> {
    messages.iter().filter(|m| !m.is_internal).collect()
}

/// `"1 message"`, `"3 messages"`.
pub fn message_count_label(count: u32) -> String {
    if count == 1 {
        "1 message".to_string()
    } else {
        format!("{count} messages")
    }
}
