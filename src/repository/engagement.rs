use crate::{
    domain::{engagement::Engagement, types::EngagementId},
    models::{ListResponse, engagement::Engagement as ApiEngagement},
    repository::{ApiRepository, EngagementReader, errors::RepositoryResult},
};

impl EngagementReader for ApiRepository {
    async fn list_engagements(&self) -> RepositoryResult<Vec<Engagement>> {
        let engagements: ListResponse<ApiEngagement> = self.get("/api/engagements").await?;
        Ok(engagements.into_items().into_iter().map(Into::into).collect())
    }

    async fn get_engagement_by_id(&self, id: &EngagementId) -> RepositoryResult<Engagement> {
        let engagement: ApiEngagement = self.get(&format!("/api/engagements/{id}")).await?;
        Ok(engagement.into())
    }
}
