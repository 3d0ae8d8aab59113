use serde::{Deserialize, Serialize};

use crate::domain::conversation::{
    Conversation as DomainConversation, Message as DomainMessage, MessageSender, ProjectBrief,
};
use crate::domain::types::{ConversationId, ProjectId, Timestamp, lenient_timestamp};

#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::conversation::Message`].
pub struct Message {
    pub id: String,
    pub conversation_id: ConversationId,
    pub sender_id: String,
    #[serde(default)]
    pub sender: Option<Sender>,
    pub content: String,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::conversation::Conversation`].
pub struct Conversation {
    pub id: ConversationId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub subject: Option<String>,
    pub status: String,
    #[serde(default)]
    pub status_id: i32,
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    #[serde(default)]
    pub message_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_message_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
/// Request body for `POST /api/conversations/{id}/messages`.
pub struct MessageCreate<'a> {
    pub content: &'a str,
}

impl From<Message> for DomainMessage {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            sender: message.sender.map(|s| MessageSender {
                id: s.id,
                name: s.name,
                kind: s.kind,
            }),
            content: message.content,
            is_internal: message.is_internal,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

impl From<Conversation> for DomainConversation {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id,
            project_id: conversation.project_id,
            subject: conversation.subject,
            status: conversation.status,
            status_id: conversation.status_id,
            project: conversation.project.map(|p| ProjectBrief {
                id: p.id,
                name: p.name,
            }),
            messages: conversation
                .messages
                .map(|messages| messages.into_iter().map(DomainMessage::from).collect()),
            message_count: conversation.message_count.unwrap_or(0),
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
            last_message_at: conversation.last_message_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_message_count_defaults_to_zero() {
        let conversation: DomainConversation = serde_json::from_value::<Conversation>(json!({
            "id": "c1",
            "project_id": "p1",
            "org_id": "org",
            "subject": null,
            "status": "open",
            "status_id": 1,
            "message_count": null,
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z",
            "last_message_at": null
        }))
        .unwrap()
        .into();

        assert_eq!(conversation.message_count, 0);
        assert!(conversation.subject.is_none());
        assert!(conversation.messages.is_none());
    }

    #[test]
    fn embedded_messages_keep_internal_flag() {
        let conversation: DomainConversation = serde_json::from_value::<Conversation>(json!({
            "id": "c1",
            "project_id": "p1",
            "status": "open",
            "message_count": 2,
            "messages": [
                {"id": "m1", "conversation_id": "c1", "sender_id": "u1",
                 "sender": {"id": "u1", "name": "Grace", "type": "staff"},
                 "content": "Visible", "is_internal": false, "attachments": [],
                 "created_at": "2024-02-01T00:00:00Z", "updated_at": "2024-02-01T00:00:00Z"},
                {"id": "m2", "conversation_id": "c1", "sender_id": "u1",
                 "content": "Staff only", "is_internal": true, "attachments": [],
                 "created_at": "2024-02-01T00:00:00Z", "updated_at": "2024-02-01T00:00:00Z"}
            ],
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z"
        }))
        .unwrap()
        .into();

        let messages = conversation.messages.unwrap();
        assert_eq!(conversation.message_count, 2);
        assert!(!messages[0].is_internal);
        assert!(messages[1].is_internal);
        assert_eq!(messages[0].sender.as_ref().unwrap().kind, "staff");
        assert!(messages[1].sender.is_none());
    }
}
