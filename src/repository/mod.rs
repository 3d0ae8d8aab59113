use std::future::Future;
use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{
    domain::{
        conversation::{Conversation, Message},
        engagement::Engagement,
        order::{NewOrderMessage, Order, OrderMessage, OrderTask},
        project::Project,
        proposal::Proposal,
        types::{ConversationId, EngagementId, OrderId, ProjectId, ProposalId},
    },
    repository::errors::{RepositoryError, RepositoryResult, error_message},
};

pub mod conversation;
pub mod engagement;
pub mod errors;
#[cfg(test)]
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod order;
pub mod project;
pub mod proposal;

const MISSING_TOKEN_MESSAGE: &str =
    "API token is not configured. Please set APP_API_TOKEN in your environment.";

/// Filters accepted by the project and conversation list endpoints, sent as
/// the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_id: Option<EngagementId>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engagement(mut self, engagement_id: EngagementId) -> Self {
        self.engagement_id = Some(engagement_id);
        self
    }
}

pub trait OrderReader {
    fn list_orders(&self) -> impl Future<Output = RepositoryResult<Vec<Order>>>;
    fn get_order_by_id(&self, id: &OrderId) -> impl Future<Output = RepositoryResult<Order>>;
    fn list_order_tasks(
        &self,
        id: &OrderId,
    ) -> impl Future<Output = RepositoryResult<Vec<OrderTask>>>;
    fn list_order_messages(
        &self,
        id: &OrderId,
    ) -> impl Future<Output = RepositoryResult<Vec<OrderMessage>>>;
}

pub trait OrderWriter {
    fn create_order_message(
        &self,
        id: &OrderId,
        message: &NewOrderMessage,
    ) -> impl Future<Output = RepositoryResult<OrderMessage>>;
}

pub trait ProposalReader {
    fn list_proposals(&self) -> impl Future<Output = RepositoryResult<Vec<Proposal>>>;
    fn get_proposal_by_id(
        &self,
        id: &ProposalId,
    ) -> impl Future<Output = RepositoryResult<Proposal>>;
}

pub trait EngagementReader {
    fn list_engagements(&self) -> impl Future<Output = RepositoryResult<Vec<Engagement>>>;
    fn get_engagement_by_id(
        &self,
        id: &EngagementId,
    ) -> impl Future<Output = RepositoryResult<Engagement>>;
}

pub trait ProjectReader {
    fn list_projects(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = RepositoryResult<Vec<Project>>>;
    fn get_project_by_id(&self, id: &ProjectId)
    -> impl Future<Output = RepositoryResult<Project>>;
}

pub trait ConversationReader {
    fn list_conversations(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = RepositoryResult<Vec<Conversation>>>;
    fn get_conversation_by_id(
        &self,
        id: &ConversationId,
    ) -> impl Future<Output = RepositoryResult<Conversation>>;
    fn list_conversation_messages(
        &self,
        id: &ConversationId,
    ) -> impl Future<Output = RepositoryResult<Vec<Message>>>;
}

pub trait ConversationWriter {
    fn create_conversation_message(
        &self,
        id: &ConversationId,
        content: &str,
    ) -> impl Future<Output = RepositoryResult<Message>>;
}

/// Backend REST API client implementing every reader and writer trait.
///
/// Cloning is cheap: the underlying [`reqwest::Client`] shares its
/// connection pool between clones.
#[derive(Clone)]
pub struct ApiRepository {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiRepository {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn get_request(&self, endpoint: &str) -> RequestBuilder {
        self.client
            .get(self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> RepositoryResult<T> {
        self.send(endpoint, self.get_request(endpoint)).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &ListQuery,
    ) -> RepositoryResult<T> {
        let request = self.get_request(endpoint).query(query);
        self.send(endpoint, request).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> RepositoryResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(endpoint)).json(body);
        self.send(endpoint, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> RepositoryResult<T> {
        let Some(token) = self.token.as_deref() else {
            return Err(RepositoryError::Unauthorized {
                endpoint: endpoint.to_string(),
                message: MISSING_TOKEN_MESSAGE.to_string(),
            });
        };

        let network = |e: reqwest::Error| RepositoryError::Network {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        };

        let response = request
            .bearer_auth(token)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        let body = response.bytes().await.map_err(network)?;

        if !status.is_success() {
            let message = error_message(status, &body);
            log::error!("{endpoint} failed with {status}: {message}");
            return Err(RepositoryError::from_status(status, endpoint, message));
        }

        serde_json::from_slice(&body).map_err(|e| {
            log::error!("Failed to decode response from {endpoint}: {e}");
            RepositoryError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> ApiRepository {
        ApiRepository::new(
            "http://localhost:9000",
            Some("token".to_string()),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn list_query_is_encoded_into_the_query_string() {
        let repo = repository();
        let url = |query: ListQuery| {
            repo.get_request("/api/projects")
                .query(&query)
                .build()
                .unwrap()
                .url()
                .to_string()
        };

        assert_eq!(url(ListQuery::new()), "http://localhost:9000/api/projects");
        assert_eq!(
            url(ListQuery::new().engagement(EngagementId::new("eng-1").unwrap())),
            "http://localhost:9000/api/projects?engagement_id=eng-1"
        );
        assert_eq!(
            url(ListQuery::new().engagement(EngagementId::from_backend("e 1&x=2"))),
            "http://localhost:9000/api/projects?engagement_id=e+1%26x%3D2"
        );
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let repo = ApiRepository::new(
            "http://localhost:9000/",
            Some("  ".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(repo.token.is_none());
        assert_eq!(repo.url("/api/orders"), "http://localhost:9000/api/orders");
    }
}
