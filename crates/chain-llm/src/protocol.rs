//! OpenAI-compatible chat completion wire types.
//!
//! Groq serves the OpenAI chat-completions request/response shape, so these
//! helpers build a "compat" JSON body from internal [`Message`] values and
//! deserialize the non-streaming response. Fields the pipeline never reads
//! are kept only where they aid logging.

use chain_core::Message;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Convert internal [`Message`] values to an OpenAI-compatible JSON array.
pub fn messages_to_compat_json(messages: &[Message]) -> Vec<Value> {
    messages
        .iter()
        .map(|m| {
            json!({
                "role": m.role.as_str(),
                "content": m.content,
            })
        })
        .collect()
}

/// Build a non-streaming chat completion request body.
pub fn build_chat_completion_body(model: &str, messages: &[Message]) -> Value {
    json!({
        "model": model,
        "messages": messages_to_compat_json(messages),
        "stream": false,
    })
}

/// Structured response returned by the remote endpoint for one invocation.
/// Ephemeral; owned by the pipeline call that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

impl ChatCompletionResponse {
    /// Convenience constructor for tests and stub generators.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            id: None,
            model: None,
            choices: vec![Choice {
                message: ResponseMessage {
                    role: Some("assistant".to_string()),
                    content: Some(content.into()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_core::Role;

    #[test]
    fn body_carries_model_messages_and_no_stream() {
        let messages = vec![
            Message::system("you are an expert at languages."),
            Message::user("convert the following from English to French: good morning."),
        ];
        let body = build_chat_completion_body("gemma2-9b-it", &messages);

        assert_eq!(body["model"], "gemma2-9b-it");
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(
            body["messages"][1]["content"],
            "convert the following from English to French: good morning."
        );
    }

    #[test]
    fn compat_json_uses_wire_role_names() {
        let json = messages_to_compat_json(&[Message::new(Role::Assistant, "hi")]);
        assert_eq!(json[0]["role"], "assistant");
    }

    #[test]
    fn response_deserializes_with_missing_optional_fields() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"bonjour"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("bonjour")
        );
        assert!(response.usage.is_none());
    }
}
