use thiserror::Error;

use chain_core::TemplateError;
use chain_llm::{LLMError, ParseError};

/// Failure of one pipeline invocation. All variants are terminal for the
/// current call; the pipeline never retries.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The caller did not supply every placeholder the prompt references.
    #[error("missing template variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    /// The remote endpoint could not be reached, rejected the credential, or
    /// returned an error status.
    #[error("generation request failed: {0}")]
    Generation(#[from] LLMError),

    /// The remote endpoint answered, but not in the expected shape.
    #[error("malformed completion response: {0}")]
    Parse(#[from] ParseError),
}

impl From<TemplateError> for PipelineError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::MissingVariables(names) => PipelineError::MissingVariables(names),
        }
    }
}
