use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::status;
use crate::domain::types::{ProposalId, Timestamp};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Proposal {
    pub id: ProposalId,
    pub number: Option<String>,
    pub status: String,
    pub client: Option<Client>,
    pub client_name: Option<String>,
    pub line_items: Vec<LineItem>,
    pub subtotal: Option<f64>,
    pub tax: Option<f64>,
    pub total: Option<f64>,
    pub valid_until: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    pub notes: Option<String>,
}

impl Proposal {
    /// Title reference: the proposal number when known, the id otherwise.
    pub fn reference(&self) -> &str {
        self.number.as_deref().unwrap_or(self.id.as_str())
    }

    pub fn can_sign(&self) -> bool {
        status::can_sign(&self.status)
    }
}
