//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::engagement::Engagement;
use crate::domain::order::{NewOrderMessage, Order, OrderMessage, OrderTask};
use crate::domain::project::Project;
use crate::domain::proposal::Proposal;
use crate::domain::types::{ConversationId, EngagementId, OrderId, ProjectId, ProposalId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ConversationReader, ConversationWriter, EngagementReader, ListQuery, OrderReader,
    OrderWriter, ProjectReader, ProposalReader,
};

mock! {
    pub Repository {}

    impl OrderReader for Repository {
        async fn list_orders(&self) -> RepositoryResult<Vec<Order>>;
        async fn get_order_by_id(&self, id: &OrderId) -> RepositoryResult<Order>;
        async fn list_order_tasks(&self, id: &OrderId) -> RepositoryResult<Vec<OrderTask>>;
        async fn list_order_messages(&self, id: &OrderId) -> RepositoryResult<Vec<OrderMessage>>;
    }

    impl OrderWriter for Repository {
        async fn create_order_message(
            &self,
            id: &OrderId,
            message: &NewOrderMessage,
        ) -> RepositoryResult<OrderMessage>;
    }

    impl ProposalReader for Repository {
        async fn list_proposals(&self) -> RepositoryResult<Vec<Proposal>>;
        async fn get_proposal_by_id(&self, id: &ProposalId) -> RepositoryResult<Proposal>;
    }

    impl EngagementReader for Repository {
        async fn list_engagements(&self) -> RepositoryResult<Vec<Engagement>>;
        async fn get_engagement_by_id(&self, id: &EngagementId) -> RepositoryResult<Engagement>;
    }

    impl ProjectReader for Repository {
        async fn list_projects(&self, query: ListQuery) -> RepositoryResult<Vec<Project>>;
        async fn get_project_by_id(&self, id: &ProjectId) -> RepositoryResult<Project>;
    }

    impl ConversationReader for Repository {
        async fn list_conversations(&self, query: ListQuery) -> RepositoryResult<Vec<Conversation>>;
        async fn get_conversation_by_id(&self, id: &ConversationId) -> RepositoryResult<Conversation>;
        async fn list_conversation_messages(
            &self,
            id: &ConversationId,
        ) -> RepositoryResult<Vec<Message>>;
    }

    impl ConversationWriter for Repository {
        async fn create_conversation_message(
            &self,
            id: &ConversationId,
            content: &str,
        ) -> RepositoryResult<Message>;
    }
}
