//! Text analysis records
//!
//! Every text operation produces one [`DocumentRecord`] per input document.
//! A record holds the source text and either the operation's payload or the
//! error message the remote service reported for that document, never both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized result for one input document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord<T> {
    /// Source text exactly as supplied by the caller
    pub text: String,

    /// Success payload or per-document error
    #[serde(flatten)]
    pub outcome: DocumentOutcome<T>,
}

/// Either the operation payload or the remote error message
///
/// Serialized without a tag, so a record flattens to
/// `{"text": ..., <payload fields>}` or `{"text": ..., "error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentOutcome<T> {
    /// The remote service analyzed the document
    Success(T),

    /// The remote service flagged the document as failed
    Failed {
        /// Message supplied by the remote service
        error: String,
    },
}

impl<T> DocumentRecord<T> {
    /// Create a successful record
    pub fn success(text: impl Into<String>, value: T) -> Self {
        Self {
            text: text.into(),
            outcome: DocumentOutcome::Success(value),
        }
    }

    /// Create an error record
    pub fn failed(text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: DocumentOutcome::Failed {
                error: error.into(),
            },
        }
    }

    /// Whether the remote service flagged this document
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, DocumentOutcome::Failed { .. })
    }

    /// The error message, if this is an error record
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            DocumentOutcome::Failed { error } => Some(error),
            DocumentOutcome::Success(_) => None,
        }
    }

    /// The success payload, if any
    pub fn value(&self) -> Option<&T> {
        match &self.outcome {
            DocumentOutcome::Success(value) => Some(value),
            DocumentOutcome::Failed { .. } => None,
        }
    }
}

/// Overall sentiment label assigned by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Predominantly positive
    Positive,
    /// Neither positive nor negative
    Neutral,
    /// Predominantly negative
    Negative,
    /// Both positive and negative sentences
    Mixed,
}

impl SentimentLabel {
    /// Get the label as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive / neutral / negative confidence scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Confidence that the document is positive
    pub positive: f64,
    /// Confidence that the document is neutral
    pub neutral: f64,
    /// Confidence that the document is negative
    pub negative: f64,
}

/// Sentiment payload of a [`SentimentRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentiment {
    /// Label copied from the remote result
    pub sentiment: SentimentLabel,
    /// Scores rounded to four decimal places
    pub scores: SentimentScores,
}

/// Key phrase payload of a [`KeyPhraseRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyPhrases {
    /// Phrases in the order the remote service returned them
    pub key_phrases: Vec<String>,
}

/// One recognized entity mention
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// Entity text as it appears in the document
    pub text: String,
    /// Category label (e.g. "Organization")
    pub category: String,
    /// Confidence rounded to four decimal places
    pub confidence: f64,
}

/// Entity payload of an [`EntityRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entities {
    /// Entities in the order the remote service returned them
    pub entities: Vec<Entity>,
}

/// Per-document sentiment outcome
pub type SentimentRecord = DocumentRecord<Sentiment>;

/// Per-document key phrase outcome
pub type KeyPhraseRecord = DocumentRecord<KeyPhrases>;

/// Per-document entity outcome
pub type EntityRecord = DocumentRecord<Entities>;

/// Error reported by the remote service for a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDocumentError {
    /// Service error code (e.g. "InvalidArgument")
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl RemoteDocumentError {
    /// Create a new document error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RemoteDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Raw per-document result from a text analytics service
pub type RemoteDocument<T> = Result<T, RemoteDocumentError>;

/// Unrounded sentiment prediction as decoded from the wire
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentPrediction {
    /// Overall label
    pub sentiment: SentimentLabel,
    /// Raw confidence scores
    pub confidence_scores: SentimentScores,
}

/// Unrounded entity prediction as decoded from the wire
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPrediction {
    /// Entity text
    pub text: String,
    /// Category label
    pub category: String,
    /// Raw confidence score
    pub confidence_score: f64,
}
