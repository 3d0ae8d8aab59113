use crate::{
    domain::{proposal::Proposal, types::ProposalId},
    models::{ListResponse, proposal::Proposal as ApiProposal},
    repository::{ApiRepository, ProposalReader, errors::RepositoryResult},
};

impl ProposalReader for ApiRepository {
    async fn list_proposals(&self) -> RepositoryResult<Vec<Proposal>> {
        let proposals: ListResponse<ApiProposal> = self.get("/api/proposals").await?;
        Ok(proposals.into_items().into_iter().map(Into::into).collect())
    }

    async fn get_proposal_by_id(&self, id: &ProposalId) -> RepositoryResult<Proposal> {
        let proposal: ApiProposal = self.get(&format!("/api/proposals/{id}")).await?;
        Ok(proposal.into())
    }
}
