use chrono::{DateTime, Utc};

use crate::domain::status::StatusBadge;
use crate::domain::types::ProjectId;
use crate::dto::project::{ProjectListPageData, ProjectPageData};
use crate::dto::{ConversationCard, ProjectCard};
use crate::formatting::format_date;
use crate::repository::{ConversationReader, ListQuery, ProjectReader};
use crate::services::{ServiceResult, or_empty};

/// Loads every project visible to the client. A failed fetch shows the
/// empty state.
pub async fn load_projects<R>(repo: &R) -> ProjectListPageData
where
    R: ProjectReader + ?Sized,
{
    let projects = or_empty(repo.list_projects(ListQuery::new()).await, "projects");

    ProjectListPageData {
        projects: projects.iter().map(ProjectCard::from).collect(),
    }
}

/// Loads a project and the conversations of its engagement.
pub async fn load_project<R>(
    repo: &R,
    project_id: &str,
    now: DateTime<Utc>,
) -> ServiceResult<ProjectPageData>
where
    R: ProjectReader + ConversationReader + ?Sized,
{
    let id = ProjectId::new(project_id)?;
    let project = repo.get_project_by_id(&id).await?;

    let conversations = repo
        .list_conversations(ListQuery::new().engagement(project.engagement_id.clone()))
        .await;
    let conversations = or_empty(conversations, "project conversations");

    Ok(ProjectPageData {
        project: ProjectCard::from(&project),
        service: project.service.as_ref().map(|s| s.name.clone()),
        engagement_id: project.engagement_id.to_string(),
        engagement_name: project.engagement.as_ref().and_then(|e| e.name.clone()),
        engagement_status: project
            .engagement
            .as_ref()
            .map(|e| StatusBadge::new(&e.status)),
        started: format_date(project.created_at),
        completed: project.completed_at.map(|at| format_date(Some(at))),
        conversations: conversations
            .iter()
            .map(|c| ConversationCard::from_conversation(c, now))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::phase::StepState;
    use crate::repository::memory::MemoryRepository;
    use crate::services::ServiceError;
    use crate::services::fixtures::*;

    #[actix_web::test]
    async fn empty_project_list_is_not_an_error() {
        let repo = MemoryRepository::new();
        let page = load_projects(&repo).await;
        assert!(page.projects.is_empty());
    }

    #[actix_web::test]
    async fn detail_shows_phase_steps_and_engagement_conversations() {
        let mut repo = MemoryRepository::new();
        repo.projects = vec![project("p1", "active", 3)];
        repo.conversations = vec![conversation("c1", Some("Kickoff"), None)];

        let detail = load_project(&repo, "p1", now()).await.unwrap();

        assert_eq!(detail.project.phase_position, "Phase 3 of 6");
        let states: Vec<StepState> = detail.project.steps.iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Completed,
                StepState::Current,
                StepState::Upcoming,
                StepState::Upcoming,
                StepState::Upcoming,
            ]
        );
        assert_eq!(detail.conversations.len(), 1);
        assert_eq!(detail.started, "May 30, 2024");
    }

    #[actix_web::test]
    async fn missing_start_date_renders_placeholder() {
        let mut record = project("p1", "active", 1);
        record.created_at = None;
        let mut repo = MemoryRepository::new();
        repo.projects = vec![record];

        let detail = load_project(&repo, "p1", now()).await.unwrap();
        assert_eq!(detail.started, "—");
    }

    #[actix_web::test]
    async fn unknown_or_malformed_project_is_not_found() {
        let repo = MemoryRepository::new();
        assert_eq!(
            load_project(&repo, "missing", now()).await.err(),
            Some(ServiceError::NotFound)
        );
        assert_eq!(
            load_project(&repo, "a/b", now()).await.err(),
            Some(ServiceError::NotFound)
        );
    }
}
