//! Image analysis types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where the image to analyze comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Publicly reachable image URL
    Url(String),
    /// Local file whose bytes are uploaded
    File(PathBuf),
}

impl ImageSource {
    /// Create a URL source
    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }

    /// Create a local file source
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageSource::File(path.into())
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Url(url) => f.write_str(url),
            ImageSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Feature category requested from a vision service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualFeature {
    /// Natural-language captions
    Description,
    /// Content tags
    Tags,
    /// Object detection with bounding boxes
    Objects,
}

impl VisualFeature {
    /// Name used in the `visualFeatures` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualFeature::Description => "Description",
            VisualFeature::Tags => "Tags",
            VisualFeature::Objects => "Objects",
        }
    }
}

/// Pixel rectangle of a detected object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

/// Generated caption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    /// Caption text
    pub text: String,
    /// Confidence rounded to four decimal places
    pub confidence: f64,
}

/// Content tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Confidence rounded to four decimal places
    pub confidence: f64,
}

/// Detected object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedObject {
    /// Object label
    pub object: String,
    /// Confidence rounded to four decimal places
    pub confidence: f64,
    /// Bounding rectangle copied from the remote result
    pub rectangle: BoundingRect,
}

/// Normalized vision output
///
/// The three lists are always present; a feature the service did not
/// return is an empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ImageAnalysis {
    /// Captions in remote order
    pub captions: Vec<Caption>,
    /// Every tag the service returned, in remote order
    pub tags: Vec<Tag>,
    /// Detected objects in remote order
    pub objects: Vec<DetectedObject>,
}

/// Raw caption as decoded from the wire
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionPrediction {
    /// Caption text
    pub text: String,
    /// Raw confidence
    pub confidence: f64,
}

/// Raw tag as decoded from the wire
#[derive(Debug, Clone, PartialEq)]
pub struct TagPrediction {
    /// Tag name
    pub name: String,
    /// Raw confidence
    pub confidence: f64,
}

/// Raw detected object as decoded from the wire
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPrediction {
    /// Object label
    pub object: String,
    /// Raw confidence
    pub confidence: f64,
    /// Bounding rectangle
    pub rectangle: BoundingRect,
}

/// Raw result of a vision call; any feature may be absent
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisionResult {
    /// Captions, if the description feature was returned
    pub captions: Option<Vec<CaptionPrediction>>,
    /// Tags, if returned
    pub tags: Option<Vec<TagPrediction>>,
    /// Objects, if returned
    pub objects: Option<Vec<ObjectPrediction>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_source_display() {
        assert_eq!(
            ImageSource::url("https://example.com/cat.jpg").to_string(),
            "https://example.com/cat.jpg"
        );
        assert_eq!(ImageSource::file("images/cat.jpg").to_string(), "images/cat.jpg");
    }

    #[test]
    fn test_empty_analysis_serializes_lists() {
        let json = serde_json::to_value(ImageAnalysis::default()).unwrap();
        assert_eq!(json["captions"], serde_json::json!([]));
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["objects"], serde_json::json!([]));
    }

    #[test]
    fn test_object_label_field_name() {
        let object = DetectedObject {
            object: "cat".to_string(),
            confidence: 0.95,
            rectangle: BoundingRect { x: 10, y: 20, w: 100, h: 80 },
        };
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["object"], "cat");
        assert_eq!(json["rectangle"]["w"], 100);
    }
}
