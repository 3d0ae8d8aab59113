use serde::Deserialize;

use crate::domain::conversation::ConversationSummary as DomainConversationSummary;
use crate::domain::engagement::{
    Engagement as DomainEngagement, EngagementClient, ProjectSummary as DomainProjectSummary,
};
use crate::domain::types::{ConversationId, EngagementId, ProjectId, Timestamp, lenient_timestamp};

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub status_id: i32,
    #[serde(default)]
    pub phase: String,
    pub phase_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationSummary {
    pub id: ConversationId,
    #[serde(default)]
    pub subject: Option<String>,
    pub status: String,
    #[serde(default)]
    pub message_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_message_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::engagement::Engagement`].
pub struct Engagement {
    pub id: EngagementId,
    pub client_id: String,
    #[serde(default)]
    pub client: Option<ClientSummary>,
    #[serde(default)]
    pub name: Option<String>,
    pub status: String,
    #[serde(default)]
    pub status_id: i32,
    #[serde(default)]
    pub projects: Option<Vec<ProjectSummary>>,
    #[serde(default)]
    pub conversations: Option<Vec<ConversationSummary>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub closed_at: Option<Timestamp>,
}

impl From<ProjectSummary> for DomainProjectSummary {
    fn from(p: ProjectSummary) -> Self {
        Self {
            id: p.id,
            name: p.name,
            status: p.status,
            status_id: p.status_id,
            phase: p.phase,
            phase_id: p.phase_id,
        }
    }
}

impl From<ConversationSummary> for DomainConversationSummary {
    fn from(c: ConversationSummary) -> Self {
        Self {
            id: c.id,
            subject: c.subject,
            status: c.status,
            message_count: c.message_count.unwrap_or(0),
            last_message_at: c.last_message_at,
        }
    }
}

impl From<Engagement> for DomainEngagement {
    fn from(engagement: Engagement) -> Self {
        Self {
            id: engagement.id,
            name: engagement.name,
            status: engagement.status,
            status_id: engagement.status_id,
            client_id: engagement.client_id,
            client: engagement.client.map(|c| EngagementClient {
                id: c.id,
                name: c.name,
                email: c.email,
            }),
            projects: engagement
                .projects
                .unwrap_or_default()
                .into_iter()
                .map(DomainProjectSummary::from)
                .collect(),
            conversations: engagement
                .conversations
                .unwrap_or_default()
                .into_iter()
                .map(DomainConversationSummary::from)
                .collect(),
            created_at: engagement.created_at,
            updated_at: engagement.updated_at,
            closed_at: engagement.closed_at,
        }
    }
}
