use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

use chain_core::{Config, Message};

use crate::error::{LLMError, Result};
use crate::protocol::{build_chat_completion_body, ChatCompletionResponse};
use crate::provider::Generator;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "gemma2-9b-it";

/// Chat completion provider for the Groq hosted API (OpenAI-compatible).
#[derive(Debug)]
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Build a provider from process configuration. The credential is
    /// required; everything else falls back to provider defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| LLMError::Config("GROQ_API_KEY is not set".to_string()))?;

        let mut provider = Self::new(api_key);
        if let Some(base) = &config.api_base {
            provider = provider.with_base_url(base.clone());
        }
        if let Some(model) = &config.model {
            provider = provider.with_model(model.clone());
        }
        if let Some(secs) = config.request_timeout_secs {
            provider = provider.with_timeout(Duration::from_secs(secs))?;
        }
        Ok(provider)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Generator for GroqProvider {
    async fn generate(
        &self,
        messages: &[Message],
        model: Option<&str>,
    ) -> Result<ChatCompletionResponse> {
        let model = model.unwrap_or(&self.model);
        let body = build_chat_completion_body(model, messages);
        debug!("requesting completion from {} (model {model})", self.base_url);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let text = response.text().await.unwrap_or_default();
            return Err(LLMError::Auth(format!("HTTP {status}: {text}")));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LLMError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let text = response.text().await?;
        let completion = serde_json::from_str::<ChatCompletionResponse>(&text)?;
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn translation_messages() -> Vec<Message> {
        vec![
            Message::system("you are an expert at languages."),
            Message::user("convert the following from English to French: good morning."),
        ]
    }

    #[tokio::test]
    async fn generate_returns_completion_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gemma2-9b-it",
                "stream": false,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cmpl-1",
                "model": "gemma2-9b-it",
                "choices": [
                    {"message": {"role": "assistant", "content": "bonjour"}, "finish_reason": "stop"}
                ],
                "usage": {"prompt_tokens": 20, "completion_tokens": 2, "total_tokens": 22}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GroqProvider::new("sk-test").with_base_url(server.uri());
        let completion = provider
            .generate(&translation_messages(), None)
            .await
            .unwrap();
        assert_eq!(
            completion.choices[0].message.content.as_deref(),
            Some("bonjour")
        );
    }

    #[tokio::test]
    async fn model_override_is_sent_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({"model": "llama-3.1-8b-instant"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "choices": [{"message": {"role": "assistant", "content": "ok"}}]
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = GroqProvider::new("sk-test").with_base_url(server.uri());
        provider
            .generate(&translation_messages(), Some("llama-3.1-8b-instant"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"error": "invalid api key"}"#),
            )
            .mount(&server)
            .await;

        let provider = GroqProvider::new("sk-bad").with_base_url(server.uri());
        let err = provider
            .generate(&translation_messages(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, LLMError::Auth(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let provider = GroqProvider::new("sk-test").with_base_url(server.uri());
        let err = provider
            .generate(&translation_messages(), None)
            .await
            .unwrap_err();
        match err {
            LLMError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = GroqProvider::new("sk-test").with_base_url(server.uri());
        let err = provider
            .generate(&translation_messages(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, LLMError::Json(_)), "got {err:?}");
    }

    #[test]
    fn from_config_requires_api_key() {
        let config = Config::default();
        let err = GroqProvider::from_config(&config).unwrap_err();
        assert!(matches!(err, LLMError::Config(_)));
    }

    #[test]
    fn from_config_applies_overrides() {
        let config = Config {
            api_key: Some("sk-test".to_string()),
            api_base: Some("http://localhost:9".to_string()),
            model: Some("llama-3.1-8b-instant".to_string()),
            ..Config::default()
        };
        let provider = GroqProvider::from_config(&config).unwrap();
        assert_eq!(provider.model(), "llama-3.1-8b-instant");
        assert_eq!(provider.base_url, "http://localhost:9");
    }
}
