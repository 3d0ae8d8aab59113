//! Backend wire models and their conversion into domain records.

use serde::Deserialize;

pub mod config;
pub mod conversation;
pub mod engagement;
pub mod order;
pub mod project;
pub mod proposal;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// List endpoints answer with a `data`/`meta` envelope or with a bare array.
/// Pagination metadata is ignored.
pub enum ListResponse<T> {
    Paginated { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { data } => data,
            ListResponse::Bare(items) => items,
        }
    }
}

/// Parses a decimal amount sent as a string. Blank or malformed input yields `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses an order price or proposal total. A zero amount is shown as missing.
pub fn parse_total(raw: &str) -> Option<f64> {
    parse_amount(raw).filter(|value| *value != 0.0)
}
