//! Recent activity on an order: public messages and completed tasks.

use serde::Serialize;

use crate::domain::order::{OrderMessage, OrderTask};
use crate::domain::types::Timestamp;

pub const DEFAULT_ACTIVITY_LIMIT: usize = 5;
const PREVIEW_CHARS: usize = 80;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Message,
    TaskCompleted,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: Option<String>,
    pub timestamp: Option<Timestamp>,
}

/// Cuts `text` to 80 characters, marking the cut with `...`.
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

/// Merges public messages and completed tasks, newest first, at most `limit` items.
pub fn activity_feed(
    messages: &[OrderMessage],
    tasks: &[OrderTask],
    limit: usize,
) -> Vec<ActivityItem> {
    let message_items = messages
        .iter()
        .filter(|m| !m.is_internal)
        .map(|m| ActivityItem {
            id: format!("msg-{}", m.id),
            kind: ActivityKind::Message,
            title: format!("Message from {}", m.sender),
            description: Some(preview(&m.content)),
            timestamp: m.created_at,
        });

    let task_items = tasks
        .iter()
        .filter(|t| t.is_completed())
        .filter_map(|t| {
            t.completed_at.map(|completed_at| ActivityItem {
                id: format!("task-{}", t.id),
                kind: ActivityKind::TaskCompleted,
                title: "Task completed".to_string(),
                description: Some(t.title.clone()),
                timestamp: Some(completed_at),
            })
        });

    let mut items: Vec<ActivityItem> = message_items.chain(task_items).collect();
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(limit);
    items
}
