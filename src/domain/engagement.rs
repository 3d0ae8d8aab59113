use serde::{Deserialize, Serialize};

use crate::domain::conversation::ConversationSummary;
use crate::domain::status::status_is;
use crate::domain::types::{EngagementId, ProjectId, Timestamp};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngagementClient {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Project as embedded in an engagement.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub status: String,
    pub status_id: i32,
    pub phase: String,
    pub phase_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engagement {
    pub id: EngagementId,
    pub name: Option<String>,
    pub status: String,
    pub status_id: i32,
    pub client_id: String,
    pub client: Option<EngagementClient>,
    pub projects: Vec<ProjectSummary>,
    pub conversations: Vec<ConversationSummary>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub closed_at: Option<Timestamp>,
}

impl Engagement {
    pub fn is_closed(&self) -> bool {
        status_is(&self.status, "closed")
    }
}
