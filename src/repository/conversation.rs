use crate::{
    domain::{
        conversation::{Conversation, Message},
        types::ConversationId,
    },
    models::{
        ListResponse,
        conversation::{
            Conversation as ApiConversation, Message as ApiMessage, MessageCreate,
        },
    },
    repository::{
        ApiRepository, ConversationReader, ConversationWriter, ListQuery,
        errors::RepositoryResult,
    },
};

impl ConversationReader for ApiRepository {
    async fn list_conversations(&self, query: ListQuery) -> RepositoryResult<Vec<Conversation>> {
        let conversations: ListResponse<ApiConversation> =
            self.get_list("/api/conversations", &query).await?;
        Ok(conversations.into_items().into_iter().map(Into::into).collect())
    }

    async fn get_conversation_by_id(&self, id: &ConversationId) -> RepositoryResult<Conversation> {
        let conversation: ApiConversation =
            self.get(&format!("/api/conversations/{id}")).await?;
        Ok(conversation.into())
    }

    async fn list_conversation_messages(
        &self,
        id: &ConversationId,
    ) -> RepositoryResult<Vec<Message>> {
        let messages: ListResponse<ApiMessage> = self
            .get(&format!("/api/conversations/{id}/messages"))
            .await?;
        Ok(messages.into_items().into_iter().map(Into::into).collect())
    }
}

impl ConversationWriter for ApiRepository {
    async fn create_conversation_message(
        &self,
        id: &ConversationId,
        content: &str,
    ) -> RepositoryResult<Message> {
        let created: ApiMessage = self
            .post(
                &format!("/api/conversations/{id}/messages"),
                &MessageCreate { content },
            )
            .await?;
        Ok(created.into())
    }
}
