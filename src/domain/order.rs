use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::phase::StepState;
use crate::domain::status::status_is;
use crate::domain::types::{OrderId, Timestamp};

/// Sender name used when the backend does not say who wrote an order message.
pub const DEFAULT_ORDER_MESSAGE_SENDER: &str = "Service Team";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub number: Option<String>,
    pub status: String,
    pub client: Option<Client>,
    pub service: Option<String>,
    pub tasks: Vec<OrderTask>,
    pub messages: Vec<OrderMessage>,
    pub total: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

impl Order {
    /// Short reference used in tables: the order number or the first 8 characters of the id.
    pub fn reference(&self) -> String {
        match &self.number {
            Some(number) => number.clone(),
            None => self.id.as_str().chars().take(8).collect(),
        }
    }

    /// Messages meant for the client.
    pub fn public_messages(&self) -> impl Iterator<Item = &OrderMessage> {
        self.messages.iter().filter(|m| !m.is_internal)
    }

    /// Tasks the client still has to act on.
    pub fn pending_tasks(&self) -> impl Iterator<Item = &OrderTask> {
        self.tasks.iter().filter(|t| !t.is_completed())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderTask {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub is_public: bool,
    pub for_client: bool,
    pub completed_at: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub sort_order: i32,
}

impl OrderTask {
    pub fn is_completed(&self) -> bool {
        status_is(&self.status, "completed")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderMessage {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub created_at: Option<Timestamp>,
    pub is_internal: bool,
}

/// Payload for posting a message on an order.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrderMessage {
    pub content: String,
    pub is_public: bool,
}

impl NewOrderMessage {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_public: true,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProgressStep {
    pub name: &'static str,
    pub state: StepState,
}

/// Four-step delivery progress derived from the order status.
pub fn order_progress(status: &str) -> Vec<ProgressStep> {
    use StepState::*;

    let states = match status.to_lowercase().as_str() {
        "completed" => [Completed, Completed, Completed, Completed],
        "in_progress" | "active" => [Completed, Current, Upcoming, Upcoming],
        "confirmed" => [Current, Upcoming, Upcoming, Upcoming],
        _ => [Upcoming, Upcoming, Upcoming, Upcoming],
    };

    ["Setup", "In Progress", "Review", "Delivered"]
        .into_iter()
        .zip(states)
        .map(|(name, state)| ProgressStep { name, state })
        .collect()
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NextStep {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub state: StepState,
}

const DATA_CLEANING: &str = "Processing your data according to specifications";
const QUALITY_REVIEW: &str = "We'll review the results for accuracy";
const FINAL_DELIVERY: &str = "You'll receive the completed work";

fn step(title: &'static str, description: &'static str, state: StepState) -> NextStep {
    NextStep {
        title,
        description: Some(description),
        state,
    }
}

pub fn order_next_steps(status: &str) -> Vec<NextStep> {
    use StepState::*;

    match status.to_lowercase().as_str() {
        "completed" => ["Data cleaning", "Quality review", "Final delivery"]
            .into_iter()
            .map(|title| NextStep {
                title,
                description: None,
                state: Completed,
            })
            .collect(),
        "in_progress" | "active" => vec![
            step("Data cleaning", DATA_CLEANING, Current),
            step("Quality review", QUALITY_REVIEW, Upcoming),
            step("Final delivery", FINAL_DELIVERY, Upcoming),
        ],
        "confirmed" => vec![
            step("Project setup", "We're preparing your project", Current),
            step("Data cleaning", DATA_CLEANING, Upcoming),
            step("Quality review", QUALITY_REVIEW, Upcoming),
            step("Final delivery", FINAL_DELIVERY, Upcoming),
        ],
        _ => vec![
            step(
                "Order confirmation",
                "Waiting for order to be confirmed",
                Current,
            ),
            step("Project setup", "We'll prepare your project", Upcoming),
            step("Data cleaning", DATA_CLEANING, Upcoming),
            step("Final delivery", FINAL_DELIVERY, Upcoming),
        ],
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskActionKind {
    Start,
    Review,
    Approve,
    View,
}

impl TaskActionKind {
    pub fn label(self) -> &'static str {
        match self {
            TaskActionKind::Start => "Start",
            TaskActionKind::Review => "Review",
            TaskActionKind::Approve => "Approve",
            TaskActionKind::View => "View",
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TaskAction {
    pub task_id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: TaskActionKind,
    pub label: &'static str,
    pub href: String,
}

/// Picks the call to action for a pending task from keywords in its title.
pub fn task_action(task: &OrderTask, order_id: &OrderId) -> TaskAction {
    let title = task.title.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| title.contains(w));

    let kind = if mentions(&["form", "intake", "complete"]) {
        TaskActionKind::Start
    } else if mentions(&["review", "sample", "check"]) {
        TaskActionKind::Review
    } else if mentions(&["approve", "confirm", "sign"]) {
        TaskActionKind::Approve
    } else {
        TaskActionKind::View
    };

    TaskAction {
        task_id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        kind,
        label: kind.label(),
        href: format!("/orders/{}/tasks/{}", order_id, task.id),
    }
}
