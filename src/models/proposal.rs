use serde::Deserialize;

use crate::domain::client::Client;
use crate::domain::proposal::{LineItem, Proposal as DomainProposal};
use crate::domain::types::{ProposalId, Timestamp, lenient_timestamp};
use crate::models::{parse_amount, parse_total};

#[derive(Debug, Clone, Deserialize)]
pub struct ProposalItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    pub price: String,
    pub total: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::proposal::Proposal`].
pub struct Proposal {
    pub id: ProposalId,
    pub client_email: String,
    pub client_name: String,
    #[serde(default)]
    pub client_company: Option<String>,
    pub status: String,
    pub total: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub items: Vec<ProposalItem>,
}

impl From<ProposalItem> for LineItem {
    fn from(item: ProposalItem) -> Self {
        Self {
            id: item.id,
            description: item.name,
            quantity: item.quantity,
            unit_price: parse_amount(&item.price).unwrap_or(0.0),
            total: parse_amount(&item.total).unwrap_or(0.0),
        }
    }
}

impl From<Proposal> for DomainProposal {
    fn from(proposal: Proposal) -> Self {
        Self {
            id: proposal.id,
            number: None,
            status: proposal.status,
            client: Some(Client {
                id: proposal.client_email.clone(),
                name: proposal.client_name.clone(),
                email: Some(proposal.client_email),
                phone: None,
                address: None,
            }),
            client_name: Some(proposal.client_name),
            line_items: proposal.items.into_iter().map(LineItem::from).collect(),
            subtotal: None,
            tax: None,
            total: parse_total(&proposal.total),
            valid_until: None,
            created_at: proposal.created_at,
            notes: proposal.notes,
        }
    }
}
