use chrono::{DateTime, Utc};
use futures::join;

use crate::domain::conversation::public_messages;
use crate::domain::status::StatusBadge;
use crate::domain::types::ConversationId;
use crate::dto::ConversationCard;
use crate::dto::conversation::{ConversationListPageData, ConversationPageData};
use crate::dto::inbox::MessageView;
use crate::forms::message::MessageForm;
use crate::repository::{ConversationReader, ConversationWriter, ListQuery};
use crate::services::{ServiceError, ServiceResult, or_empty};

/// Loads every conversation visible to the client. A failed fetch shows the
/// empty state.
pub async fn load_conversations<R>(repo: &R, now: DateTime<Utc>) -> ConversationListPageData
where
    R: ConversationReader + ?Sized,
{
    let conversations = or_empty(
        repo.list_conversations(ListQuery::new()).await,
        "conversations",
    );

    ConversationListPageData {
        conversations: conversations
            .iter()
            .map(|c| ConversationCard::from_conversation(c, now))
            .collect(),
    }
}

/// Loads a conversation thread. Messages embedded in the conversation body
/// win over the messages endpoint, which is only a fallback.
pub async fn load_conversation<R>(
    repo: &R,
    conversation_id: &str,
    now: DateTime<Utc>,
) -> ServiceResult<ConversationPageData>
where
    R: ConversationReader + ?Sized,
{
    let id = ConversationId::new(conversation_id)?;
    let (conversation, messages) = join!(
        repo.get_conversation_by_id(&id),
        repo.list_conversation_messages(&id)
    );
    let mut conversation = conversation?;

    let mut messages = match conversation.messages.take() {
        Some(embedded) => embedded,
        None => or_empty(messages, "conversation messages"),
    };
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let project_name = conversation.project.as_ref().map(|p| p.name.clone());
    Ok(ConversationPageData {
        id: conversation.id.to_string(),
        title: conversation.title().to_string(),
        status: StatusBadge::new(&conversation.status),
        project_id: conversation.project_id.to_string(),
        messages: public_messages(&messages)
            .into_iter()
            .map(|m| MessageView::new(m, project_name.as_deref(), now))
            .collect(),
        project_name,
    })
}

/// Posts a reply on a conversation.
pub async fn send_conversation_message<R>(
    repo: &R,
    conversation_id: &str,
    form: MessageForm,
) -> ServiceResult<()>
where
    R: ConversationWriter + ?Sized,
{
    let id = ConversationId::new(conversation_id)?;
    let content = form.into_content().map_err(|err| {
        log::error!("Failed to validate message form: {err}");
        ServiceError::Form("Message cannot be empty".to_string())
    })?;

    repo.create_conversation_message(&id, &content)
        .await
        .map_err(|err| {
            log::error!("Failed to send message to conversation {id}: {err}");
            err
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryRepository;
    use crate::services::fixtures::*;

    #[actix_web::test]
    async fn list_uses_subject_then_project_name() {
        let mut repo = MemoryRepository::new();
        repo.conversations = vec![
            conversation("c1", Some("Kickoff"), None),
            conversation("c2", None, None),
        ];

        let page = load_conversations(&repo, now()).await;

        assert_eq!(page.conversations[0].title, "Kickoff");
        assert_eq!(page.conversations[1].title, "Website");
        assert_eq!(page.conversations[1].message_count, "0 messages");
    }

    #[actix_web::test]
    async fn embedded_messages_are_filtered_and_ordered() {
        let mut repo = MemoryRepository::new();
        repo.conversations = vec![conversation(
            "c1",
            Some("Kickoff"),
            Some(vec![
                message("m2", "c1", 1, false),
                message("m1", "c1", 3, false),
                message("m3", "c1", 2, true),
            ]),
        )];
        repo.conversation_messages
            .insert("c1".into(), vec![message("other", "c1", 1, false)]);

        let page = load_conversation(&repo, "c1", now()).await.unwrap();
        let ids: Vec<&str> = page.messages.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(ids, vec!["m1", "m2"]);
        assert_eq!(page.project_name.as_deref(), Some("Website"));
    }

    #[actix_web::test]
    async fn messages_endpoint_is_used_when_body_omits_them() {
        let mut repo = MemoryRepository::new();
        repo.conversations = vec![conversation("c1", None, None)];
        repo.conversation_messages
            .insert("c1".into(), vec![message("m1", "c1", 1, false)]);

        let page = load_conversation(&repo, "c1", now()).await.unwrap();
        assert_eq!(page.messages.len(), 1);
    }

    #[actix_web::test]
    async fn missing_conversation_is_not_found() {
        let repo = MemoryRepository::new();
        assert_eq!(
            load_conversation(&repo, "nope", now()).await.err(),
            Some(ServiceError::NotFound)
        );
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures::*;

    #[actix_web::test]
    async fn list_failure_shows_empty_state() {
        let mut repo = MockRepository::new();
        repo.expect_list_conversations()
            .times(1)
            .returning(|_| Err(status_error(500, "Conversations are offline")));

        let page = load_conversations(&repo, now()).await;
        assert!(page.conversations.is_empty());
    }

    #[actix_web::test]
    async fn only_internal_messages_leave_thread_empty() {
        let mut repo = MockRepository::new();
        repo.expect_get_conversation_by_id()
            .withf(|id| id.as_str() == "c1")
            .returning(|_| {
                Ok(conversation(
                    "c1",
                    None,
                    Some(vec![message("m1", "c1", 1, true)]),
                ))
            });
        repo.expect_list_conversation_messages().returning(|_| {
            Err(RepositoryError::Network {
                endpoint: "/api/conversations/c1/messages".into(),
                message: "reset".into(),
            })
        });

        let page = load_conversation(&repo, "c1", now()).await.unwrap();
        assert!(page.messages.is_empty());
    }

    #[actix_web::test]
    async fn thread_failure_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_get_conversation_by_id()
            .returning(|_| Err(status_error(502, "Upstream timeout")));
        repo.expect_list_conversation_messages()
            .returning(|_| Ok(Vec::new()));

        assert_eq!(
            load_conversation(&repo, "c1", now()).await.err(),
            Some(ServiceError::Api("Upstream timeout".into()))
        );
    }

    #[actix_web::test]
    async fn reply_is_trimmed_and_sent() {
        let mut repo = MockRepository::new();
        repo.expect_create_conversation_message()
            .withf(|id, content| id.as_str() == "c1" && content == "See you Monday")
            .times(1)
            .returning(|_, content| Ok(reply("c1", content)));
        let form = MessageForm {
            content: "  See you Monday  ".into(),
        };

        send_conversation_message(&repo, "c1", form).await.unwrap();
    }

    #[actix_web::test]
    async fn blank_reply_is_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_create_conversation_message().times(0);
        let form = MessageForm {
            content: "   ".into(),
        };

        let result = send_conversation_message(&repo, "c1", form).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn rejected_reply_keeps_the_server_message() {
        let mut repo = MockRepository::new();
        repo.expect_create_conversation_message()
            .times(1)
            .returning(|_, _| Err(status_error(422, "Conversation is closed")));
        let form = MessageForm {
            content: "Hello".into(),
        };

        assert_eq!(
            send_conversation_message(&repo, "c1", form).await,
            Err(ServiceError::Api("Conversation is closed".into()))
        );
    }
}
