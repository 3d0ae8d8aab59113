use serde::Serialize;

use crate::domain::phase::NextAction;
use crate::dto::{ConversationCard, ProjectCard};

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_projects: usize,
    pub completed_projects: usize,
    pub conversations: usize,
}

/// Guidance for the first project that still has phases ahead of it.
#[derive(Debug, Serialize)]
pub struct OnboardingPanel {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub project_name: String,
    pub actions: Vec<NextAction>,
}

/// Data required to render the dashboard template.
#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    /// `false` while there is neither an open engagement nor an active project.
    pub ready: bool,
    pub greeting: String,
    pub engagement_name: Option<String>,
    pub stats: DashboardStats,
    /// At most three active projects.
    pub projects: Vec<ProjectCard>,
    /// At most three conversations.
    pub conversations: Vec<ConversationCard>,
    pub onboarding: Option<OnboardingPanel>,
}
