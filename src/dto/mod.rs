//! View data that bridges services with templates.
//!
//! Everything here is already formatted for display so templates only lay
//! values out.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::conversation::{
    Conversation, ConversationSummary, DEFAULT_CONVERSATION_TITLE, message_count_label,
};
use crate::domain::engagement::ProjectSummary;
use crate::domain::phase::{PHASE_COUNT, PhaseStep, phase_label, phase_steps};
use crate::domain::project::Project;
use crate::domain::status::StatusBadge;
use crate::formatting::format_relative;

pub mod conversation;
pub mod dashboard;
pub mod engagement;
pub mod inbox;
pub mod order;
pub mod project;
pub mod proposal;

/// Project row with its six-step phase indicator.
#[derive(Debug, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: StatusBadge,
    pub phase_label: Option<&'static str>,
    /// `Phase 3 of 6`.
    pub phase_position: String,
    pub steps: Vec<PhaseStep>,
}

impl ProjectCard {
    fn new(
        id: &str,
        name: &str,
        description: Option<&str>,
        status: &str,
        phase_id: i32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            status: StatusBadge::new(status),
            phase_label: phase_label(phase_id),
            phase_position: format!("Phase {phase_id} of {PHASE_COUNT}"),
            steps: phase_steps(phase_id),
        }
    }
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self::new(
            project.id.as_str(),
            &project.name,
            project.description.as_deref(),
            &project.status,
            project.phase_id,
        )
    }
}

impl From<&ProjectSummary> for ProjectCard {
    fn from(project: &ProjectSummary) -> Self {
        Self::new(
            project.id.as_str(),
            &project.name,
            None,
            &project.status,
            project.phase_id,
        )
    }
}

/// Conversation row: title, message count and age of the last message.
#[derive(Debug, Serialize)]
pub struct ConversationCard {
    pub id: String,
    pub title: String,
    pub status: StatusBadge,
    /// `1 message`, `3 messages`.
    pub message_count: String,
    pub last_message: Option<String>,
}

impl ConversationCard {
    pub fn from_conversation(conversation: &Conversation, now: DateTime<Utc>) -> Self {
        Self {
            id: conversation.id.to_string(),
            title: conversation.title().to_string(),
            status: StatusBadge::new(&conversation.status),
            message_count: message_count_label(conversation.message_count),
            last_message: conversation
                .last_message_at
                .map(|at| format_relative(at, now)),
        }
    }

    pub fn from_summary(summary: &ConversationSummary, now: DateTime<Utc>) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary
                .subject
                .clone()
                .unwrap_or_else(|| DEFAULT_CONVERSATION_TITLE.to_string()),
            status: StatusBadge::new(&summary.status),
            message_count: message_count_label(summary.message_count),
            last_message: summary.last_message_at.map(|at| format_relative(at, now)),
        }
    }
}
