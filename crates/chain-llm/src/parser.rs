//! Plain-text extraction from a chat completion response.
//!
//! The remote endpoint is not trusted to always return a well-formed body:
//! an empty choice list or a message without text is a [`ParseError`], kept
//! distinct from transport failures so callers can tell a broken upstream
//! apart from an unreachable one.

use thiserror::Error;

use crate::protocol::ChatCompletionResponse;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("completion contained no choices")]
    NoChoices,

    #[error("completion message contained no text content")]
    NoContent,
}

/// Extract the first choice's text content.
pub fn extract_text(response: &ChatCompletionResponse) -> Result<String, ParseError> {
    let choice = response.choices.first().ok_or(ParseError::NoChoices)?;
    choice
        .message
        .content
        .clone()
        .ok_or(ParseError::NoContent)
}
