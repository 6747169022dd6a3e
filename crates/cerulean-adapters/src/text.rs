//! Text analysis adapter

use crate::error::AdapterError;
use cerulean_domain::traits::TextAnalyticsService;
use cerulean_domain::{
    round_confidence, DocumentRecord, Entities, Entity, EntityPrediction, EntityRecord,
    KeyPhraseRecord, KeyPhrases, RemoteDocument, Sentiment, SentimentPrediction, SentimentRecord,
    SentimentScores,
};
use std::fmt;
use tracing::{debug, warn};

/// Normalizes batched text analytics results
///
/// Each operation makes one remote call for the whole batch and returns one
/// record per input, in input order. A document the service rejects becomes
/// an error record; its siblings are unaffected.
pub struct TextAnalyzer<S> {
    service: S,
}

impl<S> TextAnalyzer<S>
where
    S: TextAnalyticsService,
    S::Error: fmt::Display,
{
    /// Create a new analyzer over a text analytics service
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// The underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Sentiment label and rounded scores for each document
    pub fn analyze_sentiment(
        &self,
        documents: &[String],
    ) -> Result<Vec<SentimentRecord>, AdapterError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let results = self
            .service
            .analyze_sentiment(documents)
            .map_err(AdapterError::service)?;

        normalize("sentiment", documents, results, sentiment_from)
    }

    /// Key phrases for each document, in the service's order
    pub fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<KeyPhraseRecord>, AdapterError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let results = self
            .service
            .extract_key_phrases(documents)
            .map_err(AdapterError::service)?;

        normalize("key_phrases", documents, results, |key_phrases| KeyPhrases {
            key_phrases,
        })
    }

    /// Named entities for each document, in the service's order
    pub fn recognize_entities(
        &self,
        documents: &[String],
    ) -> Result<Vec<EntityRecord>, AdapterError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let results = self
            .service
            .recognize_entities(documents)
            .map_err(AdapterError::service)?;

        normalize("entities", documents, results, entities_from)
    }
}

fn sentiment_from(prediction: SentimentPrediction) -> Sentiment {
    let scores = prediction.confidence_scores;
    Sentiment {
        sentiment: prediction.sentiment,
        scores: SentimentScores {
            positive: round_confidence(scores.positive),
            neutral: round_confidence(scores.neutral),
            negative: round_confidence(scores.negative),
        },
    }
}

fn entities_from(predictions: Vec<EntityPrediction>) -> Entities {
    Entities {
        entities: predictions
            .into_iter()
            .map(|e| Entity {
                text: e.text,
                category: e.category,
                confidence: round_confidence(e.confidence_score),
            })
            .collect(),
    }
}

/// Pair each input with its remote result
fn normalize<R, T, F>(
    operation: &str,
    documents: &[String],
    results: Vec<RemoteDocument<R>>,
    map: F,
) -> Result<Vec<DocumentRecord<T>>, AdapterError>
where
    F: Fn(R) -> T,
{
    if results.len() != documents.len() {
        return Err(AdapterError::InvalidResponse(format!(
            "{}: sent {} documents but received {} results",
            operation,
            documents.len(),
            results.len()
        )));
    }

    let records: Vec<DocumentRecord<T>> = documents
        .iter()
        .zip(results)
        .enumerate()
        .map(|(idx, (text, result))| match result {
            Ok(raw) => DocumentRecord::success(text.clone(), map(raw)),
            Err(err) => {
                warn!(operation, document = idx, code = %err.code, "Document rejected: {}", err.message);
                DocumentRecord::failed(text.clone(), err.message)
            }
        })
        .collect();

    debug!(
        operation,
        documents = records.len(),
        failed = records.iter().filter(|r| r.is_error()).count(),
        "Normalized text analysis results"
    );

    Ok(records)
}
