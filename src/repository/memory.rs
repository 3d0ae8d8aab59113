//! In-memory repository serving fixed data to service tests.
//!
//! Failures and writes are exercised through the mockall repository instead.

use std::collections::HashMap;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::engagement::Engagement;
use crate::domain::order::{Order, OrderMessage, OrderTask};
use crate::domain::project::Project;
use crate::domain::proposal::Proposal;
use crate::domain::types::{ConversationId, EngagementId, OrderId, ProjectId, ProposalId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ConversationReader, EngagementReader, ListQuery, OrderReader, ProjectReader, ProposalReader,
};

#[derive(Clone, Default)]
pub struct MemoryRepository {
    pub orders: Vec<Order>,
    pub order_tasks: HashMap<String, Vec<OrderTask>>,
    pub order_messages: HashMap<String, Vec<OrderMessage>>,
    pub proposals: Vec<Proposal>,
    pub engagements: Vec<Engagement>,
    pub projects: Vec<Project>,
    pub conversations: Vec<Conversation>,
    pub conversation_messages: HashMap<String, Vec<Message>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(endpoint: String) -> RepositoryError {
        RepositoryError::NotFound {
            endpoint,
            message: "Not Found".to_string(),
        }
    }
}

impl OrderReader for MemoryRepository {
    async fn list_orders(&self) -> RepositoryResult<Vec<Order>> {
        Ok(self.orders.clone())
    }

    async fn get_order_by_id(&self, id: &OrderId) -> RepositoryResult<Order> {
        self.orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/api/orders/{id}")))
    }

    async fn list_order_tasks(&self, id: &OrderId) -> RepositoryResult<Vec<OrderTask>> {
        Ok(self
            .order_tasks
            .get(id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn list_order_messages(&self, id: &OrderId) -> RepositoryResult<Vec<OrderMessage>> {
        Ok(self
            .order_messages
            .get(id.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

impl ProposalReader for MemoryRepository {
    async fn list_proposals(&self) -> RepositoryResult<Vec<Proposal>> {
        Ok(self.proposals.clone())
    }

    async fn get_proposal_by_id(&self, id: &ProposalId) -> RepositoryResult<Proposal> {
        self.proposals
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/api/proposals/{id}")))
    }
}

impl EngagementReader for MemoryRepository {
    async fn list_engagements(&self) -> RepositoryResult<Vec<Engagement>> {
        Ok(self.engagements.clone())
    }

    async fn get_engagement_by_id(&self, id: &EngagementId) -> RepositoryResult<Engagement> {
        self.engagements
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/api/engagements/{id}")))
    }
}

impl ProjectReader for MemoryRepository {
    async fn list_projects(&self, query: ListQuery) -> RepositoryResult<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| {
                query
                    .engagement_id
                    .as_ref()
                    .is_none_or(|id| &p.engagement_id == id)
            })
            .cloned()
            .collect())
    }

    async fn get_project_by_id(&self, id: &ProjectId) -> RepositoryResult<Project> {
        self.projects
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/api/projects/{id}")))
    }
}

impl ConversationReader for MemoryRepository {
    async fn list_conversations(&self, query: ListQuery) -> RepositoryResult<Vec<Conversation>> {
        let Some(engagement_id) = query.engagement_id else {
            return Ok(self.conversations.clone());
        };
        let project_ids: Vec<&ProjectId> = self
            .projects
            .iter()
            .filter(|p| p.engagement_id == engagement_id)
            .map(|p| &p.id)
            .collect();
        Ok(self
            .conversations
            .iter()
            .filter(|c| project_ids.contains(&&c.project_id))
            .cloned()
            .collect())
    }

    async fn get_conversation_by_id(&self, id: &ConversationId) -> RepositoryResult<Conversation> {
        self.conversations
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/api/conversations/{id}")))
    }

    async fn list_conversation_messages(
        &self,
        id: &ConversationId,
    ) -> RepositoryResult<Vec<Message>> {
        Ok(self
            .conversation_messages
            .get(id.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
