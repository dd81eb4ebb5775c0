use async_trait::async_trait;
use chain_core::Message;

use crate::error::Result;
use crate::protocol::ChatCompletionResponse;

/// A remote text generation endpoint.
///
/// This is the only seam with external side effects: implementations perform
/// one network request per call and hold no state across calls.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Request a single non-streaming chat completion.
    ///
    /// # Arguments
    /// * `messages` - fully formatted chat messages
    /// * `model` - optional model override; `None` uses the provider default
    async fn generate(
        &self,
        messages: &[Message],
        model: Option<&str>,
    ) -> Result<ChatCompletionResponse>;
}
