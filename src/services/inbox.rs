use chrono::{DateTime, Utc};

use crate::domain::conversation::{Conversation, Message};
use crate::dto::inbox::{InboxPageData, MessageView};
use crate::repository::{ConversationReader, ListQuery};
use crate::services::or_empty;

/// Client-visible messages of every conversation, newest first.
pub fn collect_inbox(conversations: &[Conversation], now: DateTime<Utc>) -> Vec<MessageView> {
    let mut messages: Vec<(&Message, Option<&str>)> = conversations
        .iter()
        .flat_map(|c| {
            c.messages
                .iter()
                .flatten()
                .filter(|m| !m.is_internal)
                .map(move |m| (m, c.origin()))
        })
        .collect();
    messages.sort_by(|(a, _), (b, _)| b.created_at.cmp(&a.created_at));

    messages
        .into_iter()
        .map(|(message, origin)| MessageView::new(message, origin, now))
        .collect()
}

/// Loads the unified inbox. A failed fetch shows the empty state.
pub async fn load_inbox<R>(repo: &R, now: DateTime<Utc>) -> InboxPageData
where
    R: ConversationReader + ?Sized,
{
    let conversations = or_empty(
        repo.list_conversations(ListQuery::new()).await,
        "inbox conversations",
    );

    InboxPageData {
        messages: collect_inbox(&conversations, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryRepository;
    use crate::services::fixtures::*;

    #[test]
    fn inbox_skips_internal_messages_and_sorts_newest_first() {
        let mut unnamed = conversation("c2", Some("Billing"), Some(vec![message("m4", "c2", 2, false)]));
        unnamed.project = None;
        let conversations = vec![
            conversation(
                "c1",
                Some("Kickoff"),
                Some(vec![
                    message("m1", "c1", 30, false),
                    message("m2", "c1", 1, true),
                    message("m3", "c1", 5, false),
                ]),
            ),
            unnamed,
            conversation("c3", None, None),
        ];

        let inbox = collect_inbox(&conversations, now());
        let ids: Vec<&str> = inbox.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(ids, vec!["m4", "m3", "m1"]);
        assert_eq!(inbox[0].origin.as_deref(), Some("Billing"));
        assert_eq!(inbox[1].origin.as_deref(), Some("Website"));
        assert_eq!(inbox[1].sender_initial, "G");
        assert_eq!(inbox[1].sent, "5h ago");
    }

    #[test]
    fn unknown_sender_falls_back_to_team() {
        let mut anonymous = message("m1", "c1", 0, false);
        anonymous.sender = None;
        let view = MessageView::new(&anonymous, None, now());

        assert_eq!(view.sender_name, "Team");
        assert_eq!(view.sender_initial, "?");
        assert_eq!(view.sent, "Just now");
    }

    #[actix_web::test]
    async fn inbox_with_only_internal_messages_is_empty() {
        let mut repo = MemoryRepository::new();
        repo.conversations = vec![conversation(
            "c1",
            None,
            Some(vec![message("m1", "c1", 1, true)]),
        )];

        let page = load_inbox(&repo, now()).await;
        assert!(page.messages.is_empty());
    }

    #[test]
    fn undated_messages_sort_last_with_placeholder() {
        let mut undated = message("m0", "c1", 0, false);
        undated.created_at = None;
        let conversations = vec![conversation(
            "c1",
            None,
            Some(vec![undated, message("m1", "c1", 3, false)]),
        )];

        let inbox = collect_inbox(&conversations, now());

        assert_eq!(inbox[0].id, "m1");
        assert_eq!(inbox[1].id, "m0");
        assert_eq!(inbox[1].sent, "—");
        assert_eq!(inbox[1].sent_at, "—");
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures::*;

    #[actix_web::test]
    async fn inbox_failure_shows_empty_state() {
        let mut repo = MockRepository::new();
        repo.expect_list_conversations()
            .withf(|query| query.engagement_id.is_none())
            .times(1)
            .returning(|_| {
                Err(RepositoryError::Unauthorized {
                    endpoint: "/api/conversations".into(),
                    message: "Invalid token".into(),
                })
            });

        let page = load_inbox(&repo, now()).await;
        assert!(page.messages.is_empty());
    }
}
