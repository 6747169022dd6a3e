//! Trait definitions for remote service calls
//!
//! These traits define the boundary between the normalization adapters and
//! the services that do the actual analysis. Implementations live in
//! `cerulean-azure`.

use crate::chat::{ChatCompletion, ChatCompletionRequest};
use crate::text::{EntityPrediction, RemoteDocument, SentimentPrediction};
use crate::vision::{ImageSource, VisionResult, VisualFeature};

/// Batched text analytics operations
///
/// Each operation returns one result per input document, in input order.
/// A document the service could not process is an `Err` entry, not a
/// failure of the whole call.
pub trait TextAnalyticsService {
    /// Error type for whole-call failures
    type Error;

    /// Detect sentiment for each document
    fn analyze_sentiment(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<SentimentPrediction>>, Self::Error>;

    /// Extract key phrases from each document
    fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<Vec<String>>>, Self::Error>;

    /// Recognize named entities in each document
    fn recognize_entities(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<Vec<EntityPrediction>>>, Self::Error>;
}

/// Chat completion generation
pub trait ChatCompletionService {
    /// Error type for chat operations
    type Error;

    /// Generate completions for a conversation
    fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, Self::Error>;
}

/// Single-image analysis
pub trait VisionService {
    /// Error type for vision operations
    type Error;

    /// Analyze one image for the requested features
    fn analyze_image(
        &self,
        image: &ImageSource,
        features: &[VisualFeature],
    ) -> Result<VisionResult, Self::Error>;
}
