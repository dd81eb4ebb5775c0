//! The three-stage text pipeline: format, generate, parse.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use chain_core::PromptTemplate;
use chain_llm::{extract_text, Generator};

use crate::error::PipelineError;

/// A stateless, reusable pipeline from a variable map to plain text.
///
/// Stages run strictly in sequence; the first failure aborts the call and no
/// downstream stage runs. Concurrent invocations are independent - the
/// pipeline holds no mutable state, so it can be shared behind an `Arc`.
pub struct TextPipeline {
    template: PromptTemplate,
    generator: Arc<dyn Generator>,
    model: Option<String>,
}

impl TextPipeline {
    pub fn new(template: PromptTemplate, generator: Arc<dyn Generator>) -> Self {
        Self {
            template,
            generator,
            model: None,
        }
    }

    /// Override the generator's default model for this pipeline.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Run one invocation: substitute placeholders, request a completion,
    /// extract the text.
    pub async fn invoke(
        &self,
        input: &HashMap<String, String>,
    ) -> Result<String, PipelineError> {
        let messages = self.template.format(input)?;
        debug!("invoking generator with {} messages", messages.len());
        let completion = self
            .generator
            .generate(&messages, self.model.as_deref())
            .await?;
        let output = extract_text(&completion)?;
        Ok(output)
    }
}
