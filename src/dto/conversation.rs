use serde::Serialize;

use crate::domain::status::StatusBadge;
use crate::dto::ConversationCard;
use crate::dto::inbox::MessageView;

pub struct ConversationListPageData {
    pub conversations: Vec<ConversationCard>,
}

/// Data required to render one conversation thread.
#[derive(Debug, Serialize)]
pub struct ConversationPageData {
    pub id: String,
    pub title: String,
    pub status: StatusBadge,
    pub project_id: String,
    pub project_name: Option<String>,
    /// Client-visible messages, oldest first.
    pub messages: Vec<MessageView>,
}
