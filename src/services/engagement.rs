use chrono::{DateTime, Utc};

use crate::domain::status::StatusBadge;
use crate::domain::types::EngagementId;
use crate::dto::engagement::EngagementPageData;
use crate::dto::{ConversationCard, ProjectCard};
use crate::formatting::format_date;
use crate::repository::EngagementReader;
use crate::services::ServiceResult;

const UNTITLED_ENGAGEMENT: &str = "Engagement";

/// Loads one engagement with its embedded project and conversation summaries.
pub async fn load_engagement<R>(
    repo: &R,
    engagement_id: &str,
    now: DateTime<Utc>,
) -> ServiceResult<EngagementPageData>
where
    R: EngagementReader + ?Sized,
{
    let id = EngagementId::new(engagement_id)?;
    let engagement = repo.get_engagement_by_id(&id).await?;

    Ok(EngagementPageData {
        id: engagement.id.to_string(),
        name: engagement
            .name
            .clone()
            .unwrap_or_else(|| UNTITLED_ENGAGEMENT.to_string()),
        status: StatusBadge::new(&engagement.status),
        client_name: engagement.client.as_ref().map(|c| c.name.clone()),
        client_email: engagement.client.as_ref().map(|c| c.email.clone()),
        started: format_date(engagement.created_at),
        closed: engagement.closed_at.map(|at| format_date(Some(at))),
        projects: engagement.projects.iter().map(ProjectCard::from).collect(),
        conversations: engagement
            .conversations
            .iter()
            .map(|c| ConversationCard::from_summary(c, now))
            .collect(),
    })
}
