//! Page orchestration: fetch through the repository traits, degrade
//! secondary failures and shape the view data.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod conversation;
pub mod dashboard;
pub mod engagement;
pub mod inbox;
pub mod order;
pub mod project;
pub mod proposal;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    /// Backend failure carrying the message to show the visitor.
    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        if err.is_not_found() {
            ServiceError::NotFound
        } else {
            ServiceError::Api(err.message().to_string())
        }
    }
}

/// Identifiers that are not valid path segments can never exist upstream.
impl From<TypeConstraintError> for ServiceError {
    fn from(_: TypeConstraintError) -> Self {
        ServiceError::NotFound
    }
}

/// Unwraps a secondary fetch, logging and substituting an empty list on failure.
fn or_empty<T>(result: RepositoryResult<Vec<T>>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|err| {
        log::warn!("Failed to load {what}: {err}");
        Vec::new()
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_not_found() {
        let err = RepositoryError::NotFound {
            endpoint: "/api/orders/x".into(),
            message: "Order missing".into(),
        };
        assert_eq!(ServiceError::from(err), ServiceError::NotFound);
    }

    #[test]
    fn other_failures_keep_the_server_message() {
        let err = fixtures::status_error(500, "Database unavailable");
        assert_eq!(
            ServiceError::from(err),
            ServiceError::Api("Database unavailable".into())
        );
    }

    #[test]
    fn failed_secondary_fetch_becomes_empty() {
        let failed: RepositoryResult<Vec<u8>> = Err(fixtures::status_error(503, "busy"));
        assert!(or_empty(failed, "bytes").is_empty());
        assert_eq!(or_empty(Ok(vec![1u8]), "bytes"), vec![1]);
    }

    #[test]
    fn invalid_identifier_is_not_found() {
        let err = crate::domain::types::OrderId::new("../etc").unwrap_err();
        assert_eq!(ServiceError::from(err), ServiceError::NotFound);
    }
}
