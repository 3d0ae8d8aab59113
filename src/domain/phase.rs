//! The six fixed project lifecycle phases and the guidance attached to them.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Phase {
    pub id: i32,
    pub name: &'static str,
    pub label: &'static str,
}

pub const PROJECT_PHASES: [Phase; 6] = [
    Phase { id: 1, name: "kickoff", label: "Kickoff" },
    Phase { id: 2, name: "setup", label: "Setup" },
    Phase { id: 3, name: "build", label: "Build" },
    Phase { id: 4, name: "testing", label: "Testing" },
    Phase { id: 5, name: "deployment", label: "Deployment" },
    Phase { id: 6, name: "handoff", label: "Handoff" },
];

/// Number of phases every project walks through.
pub const PHASE_COUNT: usize = PROJECT_PHASES.len();

/// Position of a step relative to the current one.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PhaseStep {
    pub id: i32,
    pub label: &'static str,
    pub state: StepState,
}

pub fn phase_label(phase_id: i32) -> Option<&'static str> {
    PROJECT_PHASES
        .iter()
        .find(|phase| phase.id == phase_id)
        .map(|phase| phase.label)
}

/// Lays out the six-step indicator for a project currently in `phase_id`.
///
/// Ids outside 1..=6 are not clamped: 0 renders every step upcoming and 7 or
/// more renders every step completed.
pub fn phase_steps(phase_id: i32) -> Vec<PhaseStep> {
    PROJECT_PHASES
        .iter()
        .map(|phase| PhaseStep {
            id: phase.id,
            label: phase.label,
            state: match phase.id.cmp(&phase_id) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            },
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Primary,
    Secondary,
}

/// Call to action shown to the client for the current phase.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NextAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: String,
    pub button_label: &'static str,
    pub priority: ActionPriority,
}

impl NextAction {
    fn primary(
        title: &'static str,
        description: &'static str,
        href: String,
        button_label: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            href,
            button_label,
            priority: ActionPriority::Primary,
        }
    }

    fn secondary(
        title: &'static str,
        description: &'static str,
        href: String,
        button_label: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            href,
            button_label,
            priority: ActionPriority::Secondary,
        }
    }
}

pub fn next_actions_for_phase(phase_id: i32, project_id: &str) -> Vec<NextAction> {
    let project = format!("/projects/{project_id}");
    let tasks = format!("/projects/{project_id}/tasks");
    let messages = "/conversations".to_string();

    match phase_id {
        1 => vec![
            NextAction::primary(
                "Schedule kickoff meeting",
                "Let's set up a time to discuss your project goals and timeline.",
                project.clone(),
                "Schedule",
            ),
            NextAction::secondary(
                "Review project scope",
                "Take a look at what we'll be working on together.",
                project,
                "View details",
            ),
        ],
        2 => vec![
            NextAction::primary(
                "Complete intake form",
                "Provide the information we need to get started on your project.",
                tasks,
                "Start form",
            ),
            NextAction::secondary(
                "Provide access credentials",
                "Share the access we need to your systems securely.",
                project,
                "Add credentials",
            ),
        ],
        3 => vec![
            NextAction::primary(
                "We're working on your deliverables",
                "Our team is actively building your solution. We'll update you on progress.",
                project,
                "View progress",
            ),
            NextAction::secondary(
                "Have questions?",
                "Send us a message if you need anything.",
                messages,
                "Message us",
            ),
        ],
        4 => vec![
            NextAction::primary(
                "Review sample data",
                "Take a look at the sample output and let us know if it meets your expectations.",
                tasks,
                "Review now",
            ),
            NextAction::secondary(
                "Provide feedback",
                "Let us know what adjustments you'd like us to make.",
                messages,
                "Send feedback",
            ),
        ],
        5 => vec![NextAction::primary(
            "Final approval needed",
            "Review the completed work and approve it for final delivery.",
            tasks,
            "Approve",
        )],
        6 => vec![
            NextAction::primary(
                "Training scheduled",
                "We'll walk you through everything you need to know about your deliverables.",
                project.clone(),
                "View schedule",
            ),
            NextAction::secondary(
                "Access your deliverables",
                "Download your completed files and documentation.",
                project,
                "Download",
            ),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(phase_id: i32) -> Vec<StepState> {
        phase_steps(phase_id).into_iter().map(|s| s.state).collect()
    }

    #[test]
    fn third_phase_splits_completed_current_upcoming() {
        use StepState::*;
        assert_eq!(
            states(3),
            vec![Completed, Completed, Current, Upcoming, Upcoming, Upcoming]
        );
    }

    #[test]
    fn boundary_phases() {
        use StepState::*;
        assert_eq!(states(1)[0], Current);
        assert!(states(1)[1..].iter().all(|s| *s == Upcoming));
        assert_eq!(states(6)[5], Current);
        assert!(states(6)[..5].iter().all(|s| *s == Completed));
        assert!(states(0).iter().all(|s| *s == Upcoming));
        assert!(states(7).iter().all(|s| *s == Completed));
    }

    #[test]
    fn labels_follow_phase_ids() {
        assert_eq!(phase_label(1), Some("Kickoff"));
        assert_eq!(phase_label(6), Some("Handoff"));
        assert_eq!(phase_label(9), None);
    }

    #[test]
    fn next_actions_point_at_project() {
        let actions = next_actions_for_phase(2, "p-1");
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].href, "/projects/p-1/tasks");
        assert_eq!(actions[0].priority, ActionPriority::Primary);
        assert_eq!(actions[1].priority, ActionPriority::Secondary);
        assert!(next_actions_for_phase(0, "p-1").is_empty());
    }
}
