//! Mock providers for deterministic testing
//!
//! These providers return pre-configured results without making any network
//! calls and record every call they receive. Clones share the recorded calls.
//!
//! # Examples
//!
//! ```
//! use cerulean_azure::MockChatCompletions;
//! use cerulean_domain::traits::ChatCompletionService;
//! use cerulean_domain::{ChatCompletionRequest, ChatMessage};
//!
//! let service = MockChatCompletions::replying("Hello from the mock!");
//! let request = ChatCompletionRequest {
//!     model: "gpt-4o".to_string(),
//!     messages: vec![ChatMessage::user("Hi")],
//!     temperature: 0.7,
//!     max_tokens: 512,
//! };
//! let completion = service.create_chat_completion(&request).unwrap();
//! assert_eq!(completion.choices[0].content.as_deref(), Some("Hello from the mock!"));
//! assert_eq!(service.call_count(), 1);
//! ```

use crate::error::AzureError;
use cerulean_domain::traits::{ChatCompletionService, TextAnalyticsService, VisionService};
use cerulean_domain::{
    ChatChoice, ChatCompletion, ChatCompletionRequest, EntityPrediction, ImageSource,
    RemoteDocument, SentimentPrediction, VisionResult, VisualFeature,
};
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock text analytics service
///
/// Returns the configured results verbatim, so a test can also simulate a
/// service that answers with the wrong number of documents.
#[derive(Debug, Clone, Default)]
pub struct MockTextAnalytics {
    sentiment: Vec<RemoteDocument<SentimentPrediction>>,
    key_phrases: Vec<RemoteDocument<Vec<String>>>,
    entities: Vec<RemoteDocument<Vec<EntityPrediction>>>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockTextAnalytics {
    /// Create a mock with no configured results
    pub fn new() -> Self {
        Self::default()
    }

    /// Results returned by `analyze_sentiment`
    pub fn with_sentiment(mut self, results: Vec<RemoteDocument<SentimentPrediction>>) -> Self {
        self.sentiment = results;
        self
    }

    /// Results returned by `extract_key_phrases`
    pub fn with_key_phrases(mut self, results: Vec<RemoteDocument<Vec<String>>>) -> Self {
        self.key_phrases = results;
        self
    }

    /// Results returned by `recognize_entities`
    pub fn with_entities(mut self, results: Vec<RemoteDocument<Vec<EntityPrediction>>>) -> Self {
        self.entities = results;
        self
    }

    /// Fail every call with a communication error
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of calls received
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Document batches received, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        lock(&self.calls).clone()
    }

    fn respond<T: Clone>(
        &self,
        documents: &[String],
        results: &[RemoteDocument<T>],
    ) -> Result<Vec<RemoteDocument<T>>, AzureError> {
        lock(&self.calls).push(documents.to_vec());
        match &self.failure {
            Some(message) => Err(AzureError::Communication(message.clone())),
            None => Ok(results.to_vec()),
        }
    }
}

impl TextAnalyticsService for MockTextAnalytics {
    type Error = AzureError;

    fn analyze_sentiment(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<SentimentPrediction>>, Self::Error> {
        self.respond(documents, &self.sentiment)
    }

    fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<Vec<String>>>, Self::Error> {
        self.respond(documents, &self.key_phrases)
    }

    fn recognize_entities(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<Vec<EntityPrediction>>>, Self::Error> {
        self.respond(documents, &self.entities)
    }
}

/// Mock chat completion service
#[derive(Debug, Clone, Default)]
pub struct MockChatCompletions {
    completion: ChatCompletion,
    failure: Option<(u16, String)>,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockChatCompletions {
    /// Reply with a single choice
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_choices(vec![ChatChoice {
            content: Some(content.into()),
        }])
    }

    /// Reply with the given choices
    pub fn with_choices(choices: Vec<ChatChoice>) -> Self {
        Self {
            completion: ChatCompletion { choices },
            ..Self::default()
        }
    }

    /// Reply with zero choices
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fail every call with a status error
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            failure: Some((status, message.into())),
            ..Self::default()
        }
    }

    /// Number of calls received
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl ChatCompletionService for MockChatCompletions {
    type Error = AzureError;

    fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, Self::Error> {
        lock(&self.requests).push(request.clone());
        match &self.failure {
            Some((status, message)) => Err(AzureError::Status {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(self.completion.clone()),
        }
    }
}

/// Mock vision service
#[derive(Debug, Clone, Default)]
pub struct MockVision {
    result: VisionResult,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<(ImageSource, Vec<VisualFeature>)>>>,
}

impl MockVision {
    /// Return the given result for every call
    pub fn returning(result: VisionResult) -> Self {
        Self {
            result,
            ..Self::default()
        }
    }

    /// Fail every call with a communication error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of calls received
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Image sources and requested features, in call order
    pub fn calls(&self) -> Vec<(ImageSource, Vec<VisualFeature>)> {
        lock(&self.calls).clone()
    }
}

impl VisionService for MockVision {
    type Error = AzureError;

    fn analyze_image(
        &self,
        image: &ImageSource,
        features: &[VisualFeature],
    ) -> Result<VisionResult, Self::Error> {
        lock(&self.calls).push((image.clone(), features.to_vec()));
        match &self.failure {
            Some(message) => Err(AzureError::Communication(message.clone())),
            None => Ok(self.result.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerulean_domain::{RemoteDocumentError, SentimentLabel, SentimentScores};

    #[test]
    fn test_text_mock_records_calls() {
        let mock = MockTextAnalytics::new().with_key_phrases(vec![Ok(vec!["Azure".to_string()])]);
        let docs = vec!["Azure rocks".to_string()];

        let results = mock.extract_key_phrases(&docs).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0], docs);
    }

    #[test]
    fn test_text_mock_returns_document_errors() {
        let mock = MockTextAnalytics::new().with_sentiment(vec![
            Ok(SentimentPrediction {
                sentiment: SentimentLabel::Neutral,
                confidence_scores: SentimentScores {
                    positive: 0.1,
                    neutral: 0.8,
                    negative: 0.1,
                },
            }),
            Err(RemoteDocumentError::new("InvalidDocument", "Invalid document")),
        ]);

        let results = mock.analyze_sentiment(&["a".to_string(), "".to_string()]).unwrap();
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err().message, "Invalid document");
    }

    #[test]
    fn test_text_mock_failure() {
        let mock = MockTextAnalytics::new().failing("connection refused");
        let result = mock.recognize_entities(&["x".to_string()]);
        assert!(matches!(result, Err(AzureError::Communication(_))));
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_chat_mock_failure_status() {
        let mock = MockChatCompletions::failing(401, "Access denied");
        let request = ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![],
            temperature: 0.7,
            max_tokens: 512,
        };

        match mock.create_chat_completion(&request) {
            Err(AzureError::Status { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Access denied");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_mock_clone_shares_calls() {
        let mock1 = MockVision::returning(VisionResult::default());
        let mock2 = mock1.clone();

        mock1
            .analyze_image(&ImageSource::url("https://example.com/a.jpg"), &[])
            .unwrap();

        assert_eq!(mock1.call_count(), 1);
        assert_eq!(mock2.call_count(), 1);
    }
}
