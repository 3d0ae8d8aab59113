use crate::domain::client::display_name;
use crate::domain::proposal::Proposal;
use crate::domain::status::{StatusBadge, humanize_status};
use crate::domain::types::ProposalId;
use crate::dto::order::ClientInfo;
use crate::dto::proposal::{LineItemRow, ProposalListPageData, ProposalPageData, ProposalRow};
use crate::formatting::{format_currency, format_date};
use crate::repository::ProposalReader;
use crate::services::{ServiceError, ServiceResult, or_empty};

impl From<&Proposal> for ProposalRow {
    fn from(proposal: &Proposal) -> Self {
        Self {
            id: proposal.id.to_string(),
            reference: proposal.reference().to_string(),
            client_name: display_name(proposal.client.as_ref(), proposal.client_name.as_deref())
                .to_string(),
            status: StatusBadge::new(&proposal.status),
            created: format_date(proposal.created_at),
            total: format_currency(proposal.total),
        }
    }
}

impl From<&Proposal> for ProposalPageData {
    fn from(proposal: &Proposal) -> Self {
        let client = proposal.client.as_ref();

        Self {
            id: proposal.id.to_string(),
            title: format!("Proposal {}", proposal.reference()),
            created: format_date(proposal.created_at),
            status: StatusBadge::new(&proposal.status),
            can_sign: proposal.can_sign(),
            client: ClientInfo {
                name: display_name(client, proposal.client_name.as_deref()).to_string(),
                email: client.and_then(|c| c.email.clone()),
                phone: client.and_then(|c| c.phone.clone()),
                address: client.and_then(|c| c.address.clone()),
            },
            line_items: proposal
                .line_items
                .iter()
                .map(|item| LineItemRow {
                    description: item.description.clone(),
                    quantity: item.quantity,
                    unit_price: format_currency(Some(item.unit_price)),
                    total: format_currency(Some(item.total)),
                })
                .collect(),
            subtotal: proposal.subtotal.map(|v| format_currency(Some(v))),
            tax: proposal.tax.map(|v| format_currency(Some(v))),
            total: format_currency(proposal.total),
            notes: proposal.notes.clone(),
            valid_until: proposal.valid_until.map(|at| format_date(Some(at))),
        }
    }
}

/// Loads every proposal sent to the client. A failed fetch shows the empty
/// state.
pub async fn load_proposals<R>(repo: &R) -> ProposalListPageData
where
    R: ProposalReader + ?Sized,
{
    let proposals = or_empty(repo.list_proposals().await, "proposals");

    ProposalListPageData {
        proposals: proposals.iter().map(ProposalRow::from).collect(),
    }
}

pub async fn load_proposal<R>(repo: &R, proposal_id: &str) -> ServiceResult<ProposalPageData>
where
    R: ProposalReader + ?Sized,
{
    let id = ProposalId::new(proposal_id)?;
    let proposal = repo.get_proposal_by_id(&id).await?;
    Ok(ProposalPageData::from(&proposal))
}

/// Records the client's intent to sign.
///
/// The backend has no signing endpoint, so this only re-checks the current
/// status and logs the request for the service team.
pub async fn request_signature<R>(repo: &R, proposal_id: &str) -> ServiceResult<()>
where
    R: ProposalReader + ?Sized,
{
    let id = ProposalId::new(proposal_id)?;
    let proposal = repo.get_proposal_by_id(&id).await?;

    if !proposal.can_sign() {
        return Err(ServiceError::Form(format!(
            "This proposal is already {}",
            humanize_status(&proposal.status.to_lowercase())
        )));
    }

    log::info!("Signature requested for proposal {id}");
    Ok(())
}


#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures::*;

    #[actix_web::test]
    async fn list_failure_shows_empty_state() {
        let mut repo = MockRepository::new();
        repo.expect_list_proposals()
            .times(1)
            .returning(|| Err(status_error(500, "Proposals are offline")));

        let page = load_proposals(&repo).await;
        assert!(page.proposals.is_empty());
    }

    #[actix_web::test]
    async fn signing_checks_the_current_status() {
        let mut repo = MockRepository::new();
        repo.expect_get_proposal_by_id()
            .withf(|id| id.as_str() == "pr-1")
            .times(1)
            .returning(|_| Ok(proposal("pr-1", "sent")));

        assert_eq!(request_signature(&repo, "pr-1").await, Ok(()));
    }

    #[actix_web::test]
    async fn signing_failure_keeps_the_server_message() {
        let mut repo = MockRepository::new();
        repo.expect_get_proposal_by_id()
            .returning(|_| Err(status_error(500, "Proposal service down")));

        assert_eq!(
            request_signature(&repo, "pr-1").await,
            Err(ServiceError::Api("Proposal service down".into()))
        );
    }
}
