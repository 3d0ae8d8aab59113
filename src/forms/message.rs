use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

/// Longest message body accepted from the reply box.
pub const MAX_MESSAGE_LENGTH: u64 = 10_000;

#[derive(Debug, Deserialize, Validate)]
/// Reply posted on a conversation or an order.
pub struct MessageForm {
    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH))]
    pub content: String,
}

impl MessageForm {
    /// Validates the form and returns the trimmed message body.
    pub fn into_content(self) -> Result<String, FormError> {
        self.validate()?;
        let content = self.content.trim();
        if content.is_empty() {
            return Err(FormError::EmptyMessage);
        }
        Ok(content.to_string())
    }
}
