//! chain-llm - remote text generation behind a provider trait.
//!
//! The [`Generator`] trait is the seam between the pipeline and the network:
//! production code uses [`GroqProvider`], tests substitute recording stubs.

pub mod error;
pub mod parser;
pub mod protocol;
pub mod provider;
pub mod providers;

pub use error::{LLMError, Result};
pub use parser::{extract_text, ParseError};
pub use protocol::{ChatCompletionResponse, Choice, ResponseMessage, Usage};
pub use provider::Generator;
pub use providers::GroqProvider;
