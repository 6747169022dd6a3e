//! Cerulean Domain Layer
//!
//! Value records and service boundaries shared by every Cerulean crate.
//! The only external dependency is `serde`, used so that normalized records
//! can be printed as JSON by the CLI.
//!
//! ## Key Concepts
//!
//! - **Document records**: one normalized result per input document, carrying
//!   either a success payload or the remote service's error message
//! - **Chat messages**: ordered role/content turns sent as a full history
//! - **Image analysis**: captions, tags and detected objects, never absent
//! - **Confidence**: every remote score is rounded to four decimal places
//!
//! ## Architecture
//!
//! - Remote services are reached only through the traits in [`traits`]
//! - Provider implementations live in `cerulean-azure`
//! - The normalization contract lives in `cerulean-adapters`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod confidence;
pub mod text;
pub mod traits;
pub mod vision;

// Re-exports for convenience
pub use chat::{
    ChatChoice, ChatCompletion, ChatCompletionRequest, ChatMessage, ChatReply, ChatRole,
};
pub use confidence::{round_confidence, CONFIDENCE_DECIMALS};
pub use text::{
    DocumentOutcome, DocumentRecord, Entities, Entity, EntityPrediction, EntityRecord,
    KeyPhraseRecord, KeyPhrases, RemoteDocument, RemoteDocumentError, Sentiment, SentimentLabel,
    SentimentPrediction, SentimentRecord, SentimentScores,
};
pub use vision::{
    BoundingRect, Caption, CaptionPrediction, DetectedObject, ImageAnalysis, ImageSource,
    ObjectPrediction, Tag, TagPrediction, VisionResult, VisualFeature,
};
