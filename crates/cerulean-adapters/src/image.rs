//! Image analysis adapter

use crate::error::AdapterError;
use cerulean_domain::traits::VisionService;
use cerulean_domain::{
    round_confidence, Caption, DetectedObject, ImageAnalysis, ImageSource, Tag, VisionResult,
    VisualFeature,
};
use std::fmt;
use tracing::debug;

/// Features requested on every call
pub const REQUESTED_FEATURES: [VisualFeature; 3] = [
    VisualFeature::Description,
    VisualFeature::Tags,
    VisualFeature::Objects,
];

/// Captions, tags and detected objects for one image
pub struct ImageAnalyzer<S> {
    service: S,
}

impl<S> ImageAnalyzer<S>
where
    S: VisionService,
    S::Error: fmt::Display,
{
    /// Create a new analyzer over a vision service
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// The underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Analyze an image from a URL or a local file
    ///
    /// Features missing from the remote result come back as empty lists.
    pub fn analyze_image(&self, image: &ImageSource) -> Result<ImageAnalysis, AdapterError> {
        debug!(image = %image, "Analyzing image");

        let result = self
            .service
            .analyze_image(image, &REQUESTED_FEATURES)
            .map_err(AdapterError::service)?;

        let analysis = normalize(result);
        debug!(
            captions = analysis.captions.len(),
            tags = analysis.tags.len(),
            objects = analysis.objects.len(),
            "Normalized image analysis"
        );

        Ok(analysis)
    }

    /// Analyze a publicly reachable image URL
    pub fn analyze_image_url(&self, url: &str) -> Result<ImageAnalysis, AdapterError> {
        self.analyze_image(&ImageSource::url(url))
    }
}

fn normalize(result: VisionResult) -> ImageAnalysis {
    let captions = result
        .captions
        .unwrap_or_default()
        .into_iter()
        .map(|c| Caption {
            text: c.text,
            confidence: round_confidence(c.confidence),
        })
        .collect();

    let tags = result
        .tags
        .unwrap_or_default()
        .into_iter()
        .map(|t| Tag {
            name: t.name,
            confidence: round_confidence(t.confidence),
        })
        .collect();

    let objects = result
        .objects
        .unwrap_or_default()
        .into_iter()
        .map(|o| DetectedObject {
            object: o.object,
            confidence: round_confidence(o.confidence),
            rectangle: o.rectangle,
        })
        .collect();

    ImageAnalysis {
        captions,
        tags,
        objects,
    }
}
