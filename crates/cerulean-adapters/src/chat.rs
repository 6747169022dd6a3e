//! Chat adapter

use crate::error::AdapterError;
use cerulean_domain::traits::ChatCompletionService;
use cerulean_domain::{ChatCompletionRequest, ChatMessage, ChatReply};
use std::fmt;
use tracing::debug;

/// Deployment used when neither the caller nor the configuration names one
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";

/// Sampling temperature sent with every request
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Maximum output tokens sent with every request
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Pick the deployment for a call
///
/// The first non-empty value wins: explicit argument, configured default,
/// then [`DEFAULT_DEPLOYMENT`].
///
/// # Examples
///
/// ```
/// use cerulean_adapters::resolve_deployment;
///
/// assert_eq!(resolve_deployment(Some("gpt-35-turbo"), Some("gpt-4o")), "gpt-35-turbo");
/// assert_eq!(resolve_deployment(None, Some("gpt-4o")), "gpt-4o");
/// assert_eq!(resolve_deployment(Some(""), None), "gpt-4o");
/// ```
pub fn resolve_deployment<'a>(explicit: Option<&'a str>, configured: Option<&'a str>) -> &'a str {
    explicit
        .filter(|d| !d.is_empty())
        .or_else(|| configured.filter(|d| !d.is_empty()))
        .unwrap_or(DEFAULT_DEPLOYMENT)
}

/// Sends a conversation and returns the first reply
pub struct ChatAdapter<S> {
    service: S,
    default_deployment: Option<String>,
}

impl<S> ChatAdapter<S>
where
    S: ChatCompletionService,
    S::Error: fmt::Display,
{
    /// Create a new adapter
    ///
    /// `default_deployment` is the configured deployment, typically from
    /// `AZURE_OPENAI_DEPLOYMENT`.
    pub fn new(service: S, default_deployment: Option<String>) -> Self {
        Self {
            service,
            default_deployment,
        }
    }

    /// The underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Deployment a call with `explicit` would use
    pub fn deployment_for<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        resolve_deployment(explicit, self.default_deployment.as_deref())
    }

    /// Send `messages` and return the first choice's content
    ///
    /// # Errors
    ///
    /// - [`AdapterError::Service`] if the remote call fails
    /// - [`AdapterError::EmptyResponse`] if the service returns no choices
    /// - [`AdapterError::InvalidResponse`] if the first choice has no content
    pub fn chat(
        &self,
        messages: &[ChatMessage],
        deployment: Option<&str>,
    ) -> Result<ChatReply, AdapterError> {
        let request = ChatCompletionRequest {
            model: self.deployment_for(deployment).to_string(),
            messages: messages.to_vec(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };

        debug!(deployment = %request.model, turns = messages.len(), "Requesting chat reply");

        let completion = self
            .service
            .create_chat_completion(&request)
            .map_err(AdapterError::service)?;

        let first = completion
            .choices
            .into_iter()
            .next()
            .ok_or(AdapterError::EmptyResponse)?;

        let content = first.content.ok_or_else(|| {
            AdapterError::InvalidResponse("first choice has no message content".to_string())
        })?;

        Ok(ChatReply { content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerulean_azure::MockChatCompletions;
    use cerulean_domain::ChatChoice;

    #[test]
    fn test_returns_first_choice() {
        let service = MockChatCompletions::with_choices(vec![
            ChatChoice {
                content: Some("You should learn Azure OpenAI, Vision, and Language services.".to_string()),
            },
            ChatChoice {
                content: Some("second".to_string()),
            },
        ]);
        let adapter = ChatAdapter::new(service, Some("gpt-4o".to_string()));

        let reply = adapter
            .chat(&[ChatMessage::user("Hello")], Some("gpt-4o"))
            .unwrap();

        assert_eq!(
            reply.content,
            "You should learn Azure OpenAI, Vision, and Language services."
        );
        assert_eq!(adapter.service().call_count(), 1);
    }

    #[test]
    fn test_sends_fixed_generation_parameters() {
        let adapter = ChatAdapter::new(MockChatCompletions::replying("ok"), None);
        let messages = vec![ChatMessage::system("Be brief."), ChatMessage::user("Hi")];

        adapter.chat(&messages, None).unwrap();

        let request = adapter.service().last_request().unwrap();
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 512);
        assert_eq!(request.messages, messages);
    }

    #[test]
    fn test_explicit_deployment_wins() {
        let adapter = ChatAdapter::new(
            MockChatCompletions::replying("reply"),
            Some("gpt-4o".to_string()),
        );

        adapter
            .chat(&[ChatMessage::user("Hi")], Some("gpt-35-turbo"))
            .unwrap();

        assert_eq!(adapter.service().last_request().unwrap().model, "gpt-35-turbo");
    }

    #[test]
    fn test_configured_deployment_used_by_default() {
        let adapter = ChatAdapter::new(
            MockChatCompletions::replying("reply"),
            Some("gpt-4o".to_string()),
        );

        adapter.chat(&[ChatMessage::user("Hi")], None).unwrap();

        assert_eq!(adapter.service().last_request().unwrap().model, "gpt-4o");
    }

    #[test]
    fn test_fallback_deployment() {
        assert_eq!(resolve_deployment(None, None), DEFAULT_DEPLOYMENT);
        assert_eq!(resolve_deployment(Some(""), Some("")), DEFAULT_DEPLOYMENT);
        assert_eq!(resolve_deployment(None, Some("my-deploy")), "my-deploy");
    }

    #[test]
    fn test_zero_choices_is_empty_response() {
        let adapter = ChatAdapter::new(MockChatCompletions::empty(), None);
        let result = adapter.chat(&[ChatMessage::user("Hi")], None);
        assert_eq!(result.unwrap_err(), AdapterError::EmptyResponse);
    }

    #[test]
    fn test_null_content_is_invalid_response() {
        let adapter = ChatAdapter::new(
            MockChatCompletions::with_choices(vec![ChatChoice { content: None }]),
            None,
        );
        let result = adapter.chat(&[ChatMessage::user("Hi")], None);
        assert!(matches!(result, Err(AdapterError::InvalidResponse(_))));
    }

    #[test]
    fn test_service_failure_propagates() {
        let adapter = ChatAdapter::new(MockChatCompletions::failing(401, "Access denied"), None);
        let result = adapter.chat(&[ChatMessage::user("Hi")], None);
        assert_eq!(
            result.unwrap_err(),
            AdapterError::Service("HTTP 401: Access denied".to_string())
        );
    }
}
