//! Azure AI Language Provider
//!
//! Text analytics through the synchronous `analyze-text` REST operation.
//!
//! # Wire format
//!
//! Every request carries the input documents with their index as `id`. The
//! service answers with successful documents and failed documents in two
//! separate lists; [`LanguageClient`] puts them back into input order so
//! that result `i` always belongs to input `i`.

use crate::config::LanguageConfig;
use crate::error::AzureError;
use crate::http::{read_json, SUBSCRIPTION_KEY_HEADER};
use cerulean_domain::traits::TextAnalyticsService;
use cerulean_domain::{
    EntityPrediction, RemoteDocument, RemoteDocumentError, SentimentLabel, SentimentPrediction,
    SentimentScores,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Language REST API version
pub const API_VERSION: &str = "2023-04-01";

/// Analysis task sent in the `kind` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Document and sentence sentiment
    Sentiment,
    /// Key phrase extraction
    KeyPhrases,
    /// Named entity recognition
    Entities,
}

impl AnalysisKind {
    /// Value of the request `kind` field
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Sentiment => "SentimentAnalysis",
            AnalysisKind::KeyPhrases => "KeyPhraseExtraction",
            AnalysisKind::Entities => "EntityRecognition",
        }
    }
}

/// Azure AI Language client
pub struct LanguageClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    key: String,
    language: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeTextRequest<'a> {
    kind: &'static str,
    analysis_input: AnalysisInput<'a>,
}

#[derive(Serialize)]
struct AnalysisInput<'a> {
    documents: Vec<InputDocument<'a>>,
}

#[derive(Serialize)]
struct InputDocument<'a> {
    id: String,
    language: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeTextResponse<D> {
    results: AnalyzeTextResults<D>,
}

#[derive(Deserialize)]
struct AnalyzeTextResults<D> {
    documents: Vec<D>,
    #[serde(default)]
    errors: Vec<DocumentErrorEntry>,
}

#[derive(Deserialize)]
struct DocumentErrorEntry {
    id: String,
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: String,
    message: String,
    #[serde(default)]
    innererror: Option<InnerError>,
}

#[derive(Deserialize)]
struct InnerError {
    code: String,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentimentDocument {
    id: String,
    sentiment: SentimentLabel,
    confidence_scores: SentimentScores,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyPhraseDocument {
    id: String,
    key_phrases: Vec<String>,
}

#[derive(Deserialize)]
struct EntityDocument {
    id: String,
    entities: Vec<EntityEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityEntry {
    text: String,
    category: String,
    confidence_score: f64,
}

/// A successful document in an `analyze-text` response
trait ResultDocument {
    type Output;

    fn id(&self) -> &str;

    fn into_output(self) -> Self::Output;
}

impl ResultDocument for SentimentDocument {
    type Output = SentimentPrediction;

    fn id(&self) -> &str {
        &self.id
    }

    fn into_output(self) -> SentimentPrediction {
        SentimentPrediction {
            sentiment: self.sentiment,
            confidence_scores: self.confidence_scores,
        }
    }
}

impl ResultDocument for KeyPhraseDocument {
    type Output = Vec<String>;

    fn id(&self) -> &str {
        &self.id
    }

    fn into_output(self) -> Vec<String> {
        self.key_phrases
    }
}

impl ResultDocument for EntityDocument {
    type Output = Vec<EntityPrediction>;

    fn id(&self) -> &str {
        &self.id
    }

    fn into_output(self) -> Vec<EntityPrediction> {
        self.entities
            .into_iter()
            .map(|e| EntityPrediction {
                text: e.text,
                category: e.category,
                confidence_score: e.confidence_score,
            })
            .collect()
    }
}

impl DocumentErrorEntry {
    /// The inner error is the specific one ("Document text is empty."),
    /// the outer one is generic ("Invalid document in request.")
    fn into_document_error(self) -> RemoteDocumentError {
        match self.error.innererror {
            Some(inner) => RemoteDocumentError::new(inner.code, inner.message),
            None => RemoteDocumentError::new(self.error.code, self.error.message),
        }
    }
}

impl LanguageClient {
    /// Create a new Language client
    pub fn new(config: &LanguageConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: config.credentials.endpoint().to_string(),
            key: config.credentials.key().to_string(),
            language: config.language.clone(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/language/:analyze-text?api-version={}",
            self.endpoint, API_VERSION
        )
    }

    fn analyze<D>(
        &self,
        kind: AnalysisKind,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<D::Output>>, AzureError>
    where
        D: ResultDocument + DeserializeOwned,
    {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let request = AnalyzeTextRequest {
            kind: kind.as_str(),
            analysis_input: AnalysisInput {
                documents: documents
                    .iter()
                    .enumerate()
                    .map(|(idx, text)| InputDocument {
                        id: idx.to_string(),
                        language: &self.language,
                        text,
                    })
                    .collect(),
            },
        };

        debug!(
            kind = kind.as_str(),
            documents = documents.len(),
            endpoint = %self.endpoint,
            "Sending text analysis request"
        );

        let response = self
            .client
            .post(self.url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .json(&request)
            .send()?;

        let body: AnalyzeTextResponse<D> = read_json(response)?;
        let results = reorder(documents.len(), body.results)?;

        info!(
            kind = kind.as_str(),
            documents = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "Text analysis completed"
        );

        Ok(results)
    }
}

/// Place successful and failed documents back into input order
fn reorder<D: ResultDocument>(
    count: usize,
    results: AnalyzeTextResults<D>,
) -> Result<Vec<RemoteDocument<D::Output>>, AzureError> {
    let mut slots: Vec<Option<RemoteDocument<D::Output>>> = (0..count).map(|_| None).collect();

    let successes = results
        .documents
        .into_iter()
        .map(|doc| (doc.id().to_string(), Ok::<_, RemoteDocumentError>(doc.into_output())));
    let failures = results
        .errors
        .into_iter()
        .map(|entry| (entry.id.clone(), Err(entry.into_document_error())));

    for (id, result) in successes.chain(failures) {
        let idx = id
            .parse::<usize>()
            .ok()
            .filter(|idx| *idx < count)
            .ok_or_else(|| AzureError::InvalidResponse(format!("Unknown document id '{}'", id)))?;

        if slots[idx].replace(result).is_some() {
            return Err(AzureError::InvalidResponse(format!(
                "Duplicate result for document id '{}'",
                id
            )));
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(idx, slot)| {
            slot.ok_or_else(|| {
                AzureError::InvalidResponse(format!("Missing result for document id '{}'", idx))
            })
        })
        .collect()
}

impl TextAnalyticsService for LanguageClient {
    type Error = AzureError;

    fn analyze_sentiment(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<SentimentPrediction>>, Self::Error> {
        self.analyze::<SentimentDocument>(AnalysisKind::Sentiment, documents)
    }

    fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<Vec<String>>>, Self::Error> {
        self.analyze::<KeyPhraseDocument>(AnalysisKind::KeyPhrases, documents)
    }

    fn recognize_entities(
        &self,
        documents: &[String],
    ) -> Result<Vec<RemoteDocument<Vec<EntityPrediction>>>, Self::Error> {
        self.analyze::<EntityDocument>(AnalysisKind::Entities, documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<D: DeserializeOwned>(json: &str) -> AnalyzeTextResults<D> {
        serde_json::from_str::<AnalyzeTextResponse<D>>(json)
            .unwrap()
            .results
    }

    #[test]
    fn test_request_shape() {
        let request = AnalyzeTextRequest {
            kind: AnalysisKind::KeyPhrases.as_str(),
            analysis_input: AnalysisInput {
                documents: vec![InputDocument {
                    id: "0".to_string(),
                    language: "en",
                    text: "Hello",
                }],
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kind"], "KeyPhraseExtraction");
        assert_eq!(json["analysisInput"]["documents"][0]["id"], "0");
        assert_eq!(json["analysisInput"]["documents"][0]["text"], "Hello");
    }

    #[test]
    fn test_sentiment_response_reordered() {
        let json = r#"{
            "kind": "SentimentAnalysisResults",
            "results": {
                "documents": [
                    {
                        "id": "1",
                        "sentiment": "negative",
                        "confidenceScores": {"positive": 0.02, "neutral": 0.03, "negative": 0.95},
                        "sentences": [],
                        "warnings": []
                    },
                    {
                        "id": "0",
                        "sentiment": "positive",
                        "confidenceScores": {"positive": 0.98, "neutral": 0.01, "negative": 0.01},
                        "sentences": [],
                        "warnings": []
                    }
                ],
                "errors": [],
                "modelVersion": "2022-11-01"
            }
        }"#;

        let results = reorder(2, parse::<SentimentDocument>(json)).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].as_ref().unwrap().sentiment,
            SentimentLabel::Positive
        );
        assert_eq!(
            results[1].as_ref().unwrap().confidence_scores.negative,
            0.95
        );
    }

    #[test]
    fn test_document_error_prefers_inner_error() {
        let json = r#"{
            "kind": "KeyPhraseExtractionResults",
            "results": {
                "documents": [
                    {"id": "0", "keyPhrases": ["Azure AI", "Python"], "warnings": []}
                ],
                "errors": [
                    {
                        "id": "1",
                        "error": {
                            "code": "InvalidArgument",
                            "message": "Invalid document in request.",
                            "innererror": {"code": "InvalidDocument", "message": "Document text is empty."}
                        }
                    }
                ],
                "modelVersion": "2022-10-01"
            }
        }"#;

        let results = reorder(2, parse::<KeyPhraseDocument>(json)).unwrap();
        assert_eq!(
            results[0].as_ref().unwrap(),
            &vec!["Azure AI".to_string(), "Python".to_string()]
        );
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.code, "InvalidDocument");
        assert_eq!(err.message, "Document text is empty.");
    }

    #[test]
    fn test_entity_response() {
        let json = r#"{
            "kind": "EntityRecognitionResults",
            "results": {
                "documents": [
                    {
                        "id": "0",
                        "entities": [
                            {"text": "Microsoft", "category": "Organization", "offset": 0, "length": 9, "confidenceScore": 0.99},
                            {"text": "Azure", "category": "Product", "offset": 10, "length": 5, "confidenceScore": 0.97}
                        ],
                        "warnings": []
                    }
                ],
                "errors": []
            }
        }"#;

        let results = reorder(1, parse::<EntityDocument>(json)).unwrap();
        let entities = results[0].as_ref().unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].category, "Organization");
        assert_eq!(entities[1].confidence_score, 0.97);
    }

    #[test]
    fn test_missing_document_is_invalid() {
        let json = r#"{"results": {"documents": [{"id": "0", "keyPhrases": []}], "errors": []}}"#;
        let result = reorder(2, parse::<KeyPhraseDocument>(json));
        assert!(matches!(result, Err(AzureError::InvalidResponse(_))));
    }

    #[test]
    fn test_unknown_and_duplicate_ids_are_invalid() {
        let json = r#"{"results": {"documents": [{"id": "7", "keyPhrases": []}]}}"#;
        assert!(reorder(1, parse::<KeyPhraseDocument>(json)).is_err());

        let json = r#"{"results": {"documents": [
            {"id": "0", "keyPhrases": []},
            {"id": "0", "keyPhrases": ["again"]}
        ]}}"#;
        assert!(reorder(1, parse::<KeyPhraseDocument>(json)).is_err());
    }

    #[test]
    fn test_unknown_sentiment_label_fails_decoding() {
        let json = r#"{"results": {"documents": [
            {"id": "0", "sentiment": "ecstatic", "confidenceScores": {"positive": 1.0, "neutral": 0.0, "negative": 0.0}}
        ]}}"#;
        assert!(serde_json::from_str::<AnalyzeTextResponse<SentimentDocument>>(json).is_err());
    }

    #[test]
    fn test_empty_batch_skips_request() {
        let config = LanguageConfig::new(
            Some("http://127.0.0.1:1".to_string()),
            Some("key".to_string()),
        )
        .unwrap();
        let client = LanguageClient::new(&config);
        assert!(client.analyze_sentiment(&[]).unwrap().is_empty());
    }
}
