//! Status vocabulary shared by orders, proposals, projects and tasks.
//!
//! Statuses are free-form strings owned by the backend. Known values are only
//! recognised for display purposes and always compared case-insensitively.

use serde::Serialize;

/// Proposal statuses after which the proposal can no longer be signed.
pub const SIGNED_STATUSES: [&str; 3] = ["signed", "approved", "declined"];

/// Visual flavour of a status badge.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Secondary,
    Info,
    Warning,
    Purple,
    Success,
    Destructive,
}

/// Status ready to be rendered as a badge.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl StatusBadge {
    pub fn new(status: &str) -> Self {
        Self {
            label: humanize_status(status),
            variant: status_variant(status),
        }
    }
}

/// Replaces every underscore with a space: `in_progress` becomes `in progress`.
pub fn humanize_status(status: &str) -> String {
    status.replace('_', " ")
}

/// Case-insensitive status comparison.
pub fn status_is(status: &str, expected: &str) -> bool {
    status.eq_ignore_ascii_case(expected)
}

pub fn status_variant(status: &str) -> BadgeVariant {
    match status.to_lowercase().as_str() {
        "pending" | "viewed" => BadgeVariant::Warning,
        "confirmed" | "sent" => BadgeVariant::Info,
        "in_progress" | "active" => BadgeVariant::Purple,
        "completed" | "signed" | "approved" => BadgeVariant::Success,
        "cancelled" | "declined" => BadgeVariant::Destructive,
        _ => BadgeVariant::Secondary,
    }
}

/// Returns `true` when a proposal in this status still accepts a signature.
pub fn can_sign(status: &str) -> bool {
    !SIGNED_STATUSES
        .iter()
        .any(|signed| status_is(status, signed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_replaces_every_underscore() {
        assert_eq!(humanize_status("in_progress"), "in progress");
        assert_eq!(humanize_status("waiting_on_client_input"), "waiting on client input");
        assert_eq!(humanize_status("completed"), "completed");
        assert_eq!(humanize_status(""), "");
    }

    #[test]
    fn variants_ignore_case() {
        assert_eq!(status_variant("IN_PROGRESS"), BadgeVariant::Purple);
        assert_eq!(status_variant("Completed"), BadgeVariant::Success);
        assert_eq!(status_variant("declined"), BadgeVariant::Destructive);
        assert_eq!(status_variant("on_hold"), BadgeVariant::Secondary);
    }

    #[test]
    fn badge_keeps_original_casing_in_label() {
        let badge = StatusBadge::new("In_Progress");
        assert_eq!(badge.label, "In Progress");
        assert_eq!(badge.variant, BadgeVariant::Purple);
    }

    #[test]
    fn signed_statuses_disable_signing() {
        assert!(!can_sign("signed"));
        assert!(!can_sign("APPROVED"));
        assert!(!can_sign("Declined"));
        assert!(can_sign("sent"));
        assert!(can_sign("viewed"));
        assert!(can_sign("draft"));
    }
}
