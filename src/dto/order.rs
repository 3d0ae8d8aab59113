use serde::Serialize;

use crate::domain::activity::ActivityKind;
use crate::domain::order::{NextStep, ProgressStep, TaskAction};
use crate::domain::status::StatusBadge;

/// One row of the orders table.
#[derive(Debug, Serialize)]
pub struct OrderRow {
    pub id: String,
    /// `#1042`, or `#` and the first 8 characters of the id.
    pub reference: String,
    pub service: String,
    pub status: StatusBadge,
    pub created: String,
    pub total: String,
}

pub struct OrderListPageData {
    pub orders: Vec<OrderRow>,
}

/// Contact panel shared by orders and proposals.
#[derive(Debug, Serialize)]
pub struct ClientInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: StatusBadge,
    pub completed: bool,
    pub due: Option<String>,
    pub completed_on: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityRow {
    pub kind: ActivityKind,
    pub title: String,
    pub description: Option<String>,
    pub when: String,
}

#[derive(Debug, Serialize)]
pub struct OrderMessageView {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub sent_at: String,
}

/// Data required to render the order detail page.
#[derive(Debug, Serialize)]
pub struct OrderPageData {
    pub id: String,
    pub reference: String,
    pub status: StatusBadge,
    pub service: Option<String>,
    pub created: String,
    pub completed: Option<String>,
    pub client: ClientInfo,
    pub progress: Vec<ProgressStep>,
    pub next_steps: Vec<NextStep>,
    /// Calls to action for pending tasks.
    pub actions: Vec<TaskAction>,
    pub tasks: Vec<TaskRow>,
    pub activity: Vec<ActivityRow>,
    /// Client-visible messages, oldest first.
    pub messages: Vec<OrderMessageView>,
    pub total: String,
    pub notes: Option<String>,
}
