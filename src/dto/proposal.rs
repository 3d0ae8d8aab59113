use serde::Serialize;

use crate::domain::status::StatusBadge;
use crate::dto::order::ClientInfo;

#[derive(Debug, Serialize)]
pub struct ProposalRow {
    pub id: String,
    pub reference: String,
    pub client_name: String,
    pub status: StatusBadge,
    pub created: String,
    pub total: String,
}

pub struct ProposalListPageData {
    pub proposals: Vec<ProposalRow>,
}

#[derive(Debug, Serialize)]
pub struct LineItemRow {
    pub description: String,
    pub quantity: i64,
    pub unit_price: String,
    pub total: String,
}

/// Data required to render the proposal detail page.
#[derive(Debug, Serialize)]
pub struct ProposalPageData {
    pub id: String,
    /// `Proposal 2024-001`, or the id when the proposal has no number.
    pub title: String,
    pub created: String,
    pub status: StatusBadge,
    pub can_sign: bool,
    pub client: ClientInfo,
    pub line_items: Vec<LineItemRow>,
    pub subtotal: Option<String>,
    pub tax: Option<String>,
    pub total: String,
    pub notes: Option<String>,
    pub valid_until: Option<String>,
}
