//! Azure OpenAI Provider
//!
//! Chat completions against a named deployment. The deployment is part of
//! the request, so one client serves every deployment on the resource.

use crate::config::{ConfigError, OpenAiConfig};
use crate::error::AzureError;
use crate::http::{read_json, API_KEY_HEADER};
use cerulean_domain::traits::ChatCompletionService;
use cerulean_domain::{ChatChoice, ChatCompletion, ChatCompletionRequest, ChatMessage};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Azure OpenAI chat client
pub struct OpenAiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    key: String,
    api_version: String,
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    #[serde(default)]
    choices: Vec<ChoiceEntry>,
}

#[derive(Deserialize)]
struct ChoiceEntry {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl From<ChatResponseBody> for ChatCompletion {
    fn from(body: ChatResponseBody) -> Self {
        ChatCompletion {
            choices: body
                .choices
                .into_iter()
                .map(|choice| ChatChoice {
                    content: choice.message.and_then(|m| m.content),
                })
                .collect(),
        }
    }
}

impl OpenAiClient {
    /// Create a new Azure OpenAI client
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: config.credentials.endpoint().to_string(),
            key: config.credentials.key().to_string(),
            api_version: config.api_version.clone(),
        }
    }

    /// Chat completions URL for a deployment
    ///
    /// The deployment is one percent-encoded path segment, so a name
    /// containing `/` or `?` cannot change the route or the query.
    pub fn completions_url(&self, deployment: &str) -> Result<Url, AzureError> {
        let invalid = || ConfigError::InvalidEndpoint(self.endpoint.clone());

        let mut url = Url::parse(&self.endpoint).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["openai", "deployments", deployment, "chat", "completions"]);
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);

        Ok(url)
    }
}

impl ChatCompletionService for OpenAiClient {
    type Error = AzureError;

    fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, Self::Error> {
        let body = ChatRequestBody {
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            deployment = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url(&request.model)?)
            .header(API_KEY_HEADER, &self.key)
            .json(&body)
            .send()?;

        let completion: ChatCompletion = read_json::<ChatResponseBody>(response)?.into();

        info!(
            deployment = %request.model,
            choices = completion.choices.len(),
            "Chat completion received"
        );

        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> OpenAiClient {
        let config = OpenAiConfig::new(
            Some("https://test.openai.azure.com/".to_string()),
            Some("test-key".to_string()),
            None,
        )
        .unwrap();
        OpenAiClient::new(&config)
    }

    #[test]
    fn test_completions_url() {
        assert_eq!(
            test_client().completions_url("gpt-4o").unwrap().as_str(),
            "https://test.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn test_deployment_name_is_encoded() {
        let url = test_client().completions_url("a/b?x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://test.openai.azure.com/openai/deployments/a%2Fb%3Fx/chat/completions?api-version=2024-02-01"
        );
        assert_eq!(url.query(), Some("api-version=2024-02-01"));
    }

    #[test]
    fn test_endpoint_with_base_path() {
        let config = OpenAiConfig::new(
            Some("https://gateway.example.com/azure/".to_string()),
            Some("test-key".to_string()),
            None,
        )
        .unwrap();
        let url = OpenAiClient::new(&config).completions_url("gpt-4o").unwrap();
        assert_eq!(
            url.path(),
            "/azure/openai/deployments/gpt-4o/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::system("Be brief."), ChatMessage::user("Hello")];
        let body = ChatRequestBody {
            messages: &messages,
            temperature: 0.7,
            max_tokens: 512,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hello");
        assert_eq!(json["max_tokens"], 512);
        assert!(json.get("model").is_none());
    }

    #[test]
    fn test_response_decoding() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "finish_reason": "stop",
                    "message": {"role": "assistant", "content": "Learn Azure OpenAI first."}
                },
                {
                    "index": 1,
                    "finish_reason": "content_filter",
                    "message": {"role": "assistant", "content": null}
                }
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;

        let body: ChatResponseBody = serde_json::from_str(json).unwrap();
        let completion: ChatCompletion = body.into();
        assert_eq!(completion.choices.len(), 2);
        assert_eq!(
            completion.choices[0].content.as_deref(),
            Some("Learn Azure OpenAI first.")
        );
        assert!(completion.choices[1].content.is_none());
    }

    #[test]
    fn test_response_without_choices() {
        let body: ChatResponseBody = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        let completion: ChatCompletion = body.into();
        assert!(completion.choices.is_empty());
    }
}
