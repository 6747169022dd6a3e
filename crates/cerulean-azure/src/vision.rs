//! Azure AI Vision Provider
//!
//! Image analysis through the v3.2 `analyze` operation. A URL is sent as a
//! JSON body; a local file is uploaded as raw bytes.

use crate::config::VisionConfig;
use crate::error::AzureError;
use crate::http::{read_json, SUBSCRIPTION_KEY_HEADER};
use cerulean_domain::traits::VisionService;
use cerulean_domain::{
    BoundingRect, CaptionPrediction, ImageSource, ObjectPrediction, TagPrediction, VisionResult,
    VisualFeature,
};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, info};

/// Path of the analyze operation, relative to the endpoint
pub const ANALYZE_PATH: &str = "vision/v3.2/analyze";

/// Azure AI Vision client
pub struct VisionClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    key: String,
}

#[derive(Deserialize)]
struct AnalyzeImageResponse {
    #[serde(default)]
    description: Option<DescriptionEntry>,
    #[serde(default)]
    tags: Option<Vec<TagEntry>>,
    #[serde(default)]
    objects: Option<Vec<ObjectEntry>>,
}

#[derive(Deserialize)]
struct DescriptionEntry {
    #[serde(default)]
    captions: Option<Vec<CaptionEntry>>,
}

#[derive(Deserialize)]
struct CaptionEntry {
    text: String,
    confidence: f64,
}

#[derive(Deserialize)]
struct TagEntry {
    name: String,
    confidence: f64,
}

#[derive(Deserialize)]
struct ObjectEntry {
    object: String,
    confidence: f64,
    rectangle: BoundingRect,
}

impl From<AnalyzeImageResponse> for VisionResult {
    fn from(response: AnalyzeImageResponse) -> Self {
        VisionResult {
            captions: response.description.and_then(|d| d.captions).map(|captions| {
                captions
                    .into_iter()
                    .map(|c| CaptionPrediction {
                        text: c.text,
                        confidence: c.confidence,
                    })
                    .collect()
            }),
            tags: response.tags.map(|tags| {
                tags.into_iter()
                    .map(|t| TagPrediction {
                        name: t.name,
                        confidence: t.confidence,
                    })
                    .collect()
            }),
            objects: response.objects.map(|objects| {
                objects
                    .into_iter()
                    .map(|o| ObjectPrediction {
                        object: o.object,
                        confidence: o.confidence,
                        rectangle: o.rectangle,
                    })
                    .collect()
            }),
        }
    }
}

impl VisionClient {
    /// Create a new Vision client
    pub fn new(config: &VisionConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: config.credentials.endpoint().to_string(),
            key: config.credentials.key().to_string(),
        }
    }

    /// Analyze URL for the requested features
    pub fn analyze_url(&self, features: &[VisualFeature]) -> String {
        let features: Vec<&str> = features.iter().map(|f| f.as_str()).collect();
        format!(
            "{}/{}?visualFeatures={}",
            self.endpoint,
            ANALYZE_PATH,
            features.join(",")
        )
    }
}

impl VisionService for VisionClient {
    type Error = AzureError;

    fn analyze_image(
        &self,
        image: &ImageSource,
        features: &[VisualFeature],
    ) -> Result<VisionResult, Self::Error> {
        let request = self
            .client
            .post(self.analyze_url(features))
            .header(SUBSCRIPTION_KEY_HEADER, &self.key);

        let request = match image {
            ImageSource::Url(url) => request.json(&serde_json::json!({ "url": url })),
            ImageSource::File(path) => {
                let bytes = std::fs::read(path)?;
                debug!(path = %path.display(), bytes = bytes.len(), "Uploading local image");
                request
                    .header(CONTENT_TYPE, "application/octet-stream")
                    .body(bytes)
            }
        };

        debug!(image = %image, features = features.len(), "Sending image analysis request");

        let response = request.send()?;
        let result: VisionResult = read_json::<AnalyzeImageResponse>(response)?.into();

        info!(
            captions = result.captions.as_ref().map_or(0, Vec::len),
            tags = result.tags.as_ref().map_or(0, Vec::len),
            objects = result.objects.as_ref().map_or(0, Vec::len),
            "Image analysis completed"
        );

        Ok(result)
    }
}
