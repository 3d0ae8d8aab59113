//! Form definitions backing the portal routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod message;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("message is empty")]
    EmptyMessage,
}
