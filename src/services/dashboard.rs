use chrono::{DateTime, Utc};
use futures::join;

use crate::domain::client::first_name;
use crate::domain::phase::{PHASE_COUNT, next_actions_for_phase};
use crate::domain::project::Project;
use crate::dto::dashboard::{DashboardPageData, DashboardStats, OnboardingPanel};
use crate::dto::{ConversationCard, ProjectCard};
use crate::repository::{ConversationReader, EngagementReader, ListQuery, ProjectReader};
use crate::services::or_empty;

const DASHBOARD_LIMIT: usize = 3;

/// Loads the dashboard. Every section degrades to empty on its own, so this
/// never fails.
pub async fn load_dashboard<R>(repo: &R, now: DateTime<Utc>) -> DashboardPageData
where
    R: EngagementReader + ProjectReader + ConversationReader + ?Sized,
{
    let (engagements, projects, conversations) = join!(
        repo.list_engagements(),
        repo.list_projects(ListQuery::new()),
        repo.list_conversations(ListQuery::new()),
    );
    let engagements = or_empty(engagements, "engagements");
    let projects = or_empty(projects, "projects");
    let conversations = or_empty(conversations, "conversations");

    let active_engagement = engagements.iter().find(|e| !e.is_closed());
    let (completed, active): (Vec<&Project>, Vec<&Project>) =
        projects.iter().partition(|p| p.is_completed());

    let greeting = active_engagement
        .and_then(|e| e.client.as_ref())
        .map(|client| format!("Welcome back, {}", first_name(&client.name)))
        .unwrap_or_else(|| "Dashboard".to_string());

    DashboardPageData {
        ready: active_engagement.is_some() || !active.is_empty(),
        greeting,
        engagement_name: active_engagement.and_then(|e| e.name.clone()),
        stats: DashboardStats {
            active_projects: active.len(),
            completed_projects: completed.len(),
            conversations: conversations.len(),
        },
        projects: active
            .iter()
            .take(DASHBOARD_LIMIT)
            .map(|p| ProjectCard::from(*p))
            .collect(),
        conversations: conversations
            .iter()
            .take(DASHBOARD_LIMIT)
            .map(|c| ConversationCard::from_conversation(c, now))
            .collect(),
        onboarding: onboarding_panel(&projects),
    }
}

fn onboarding_panel(projects: &[Project]) -> Option<OnboardingPanel> {
    let project = projects
        .iter()
        .find(|p| p.phase_id <= PHASE_COUNT as i32)?;
    let actions = next_actions_for_phase(project.phase_id, project.id.as_str());
    if actions.is_empty() {
        return None;
    }

    let new_engagement = projects.iter().all(|p| p.phase_id == 1);
    Some(OnboardingPanel {
        title: if new_engagement {
            "Welcome to your project workspace"
        } else {
            "What's next"
        },
        subtitle: new_engagement.then_some("Here's what you need to do to get started"),
        project_name: project.name.clone(),
        actions,
    })
}
