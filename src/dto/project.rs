use serde::Serialize;

use crate::domain::status::StatusBadge;
use crate::dto::{ConversationCard, ProjectCard};

pub struct ProjectListPageData {
    pub projects: Vec<ProjectCard>,
}

#[derive(Debug, Serialize)]
pub struct ProjectPageData {
    pub project: ProjectCard,
    pub service: Option<String>,
    pub engagement_id: String,
    pub engagement_name: Option<String>,
    pub engagement_status: Option<StatusBadge>,
    pub started: String,
    pub completed: Option<String>,
    pub conversations: Vec<ConversationCard>,
}
