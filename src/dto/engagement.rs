use serde::Serialize;

use crate::domain::status::StatusBadge;
use crate::dto::{ConversationCard, ProjectCard};

/// Data required to render a single engagement.
#[derive(Debug, Serialize)]
pub struct EngagementPageData {
    pub id: String,
    pub name: String,
    pub status: StatusBadge,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub started: String,
    pub closed: Option<String>,
    pub projects: Vec<ProjectCard>,
    pub conversations: Vec<ConversationCard>,
}
