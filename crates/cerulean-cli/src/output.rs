//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use cerulean_domain::{
    ChatReply, DocumentOutcome, EntityRecord, ImageAnalysis, KeyPhraseRecord, SentimentLabel,
    SentimentRecord,
};
use colored::{Color, Colorize};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Width of the source text shown under each sentiment line
const TEXT_PREVIEW_CHARS: usize = 70;

/// Width of the source text column in tables
const TABLE_TEXT_CHARS: usize = 40;

/// Results of the three text operations over one batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextReport {
    /// Sentiment records in input order
    pub sentiment: Vec<SentimentRecord>,
    /// Key phrase records in input order
    pub key_phrases: Vec<KeyPhraseRecord>,
    /// Entity records in input order
    pub entities: Vec<EntityRecord>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    tag_limit: usize,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            tag_limit: 8,
        }
    }

    /// Limit the number of tags shown in text and table output.
    pub fn with_tag_limit(mut self, tag_limit: usize) -> Self {
        self.tag_limit = tag_limit;
        self
    }

    /// Section banner, shown only in text format.
    pub fn banner(&self, title: &str) -> Option<String> {
        match self.format {
            OutputFormat::Text => Some(self.colorize(&format!("=== {} ===\n", title), Color::Cyan)),
            _ => None,
        }
    }

    /// Format the text analysis report.
    pub fn format_text_report(&self, report: &TextReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.text_report_table(report)),
            OutputFormat::Text => Ok(self.text_report_text(report)),
        }
    }

    /// Format a chat reply.
    pub fn format_reply(&self, reply: &ChatReply) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reply)?),
            OutputFormat::Table | OutputFormat::Text => Ok(reply.content.clone()),
        }
    }

    /// Format an image analysis.
    ///
    /// JSON output carries every tag; text and table output show the top
    /// `tag_limit` tags.
    pub fn format_image_analysis(&self, analysis: &ImageAnalysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Table => Ok(self.image_table(analysis)),
            OutputFormat::Text => Ok(self.image_text(analysis)),
        }
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, Color::Blue)
    }

    fn text_report_text(&self, report: &TextReport) -> String {
        let mut lines = vec!["-- Sentiment Analysis --".to_string()];
        for record in &report.sentiment {
            match &record.outcome {
                DocumentOutcome::Success(value) => {
                    let label = format!("{:8}", value.sentiment.as_str().to_uppercase());
                    lines.push(format!(
                        "  [{}] +{:.2} / ~{:.2} / -{:.2}",
                        self.colorize(&label, sentiment_color(value.sentiment)),
                        value.scores.positive,
                        value.scores.neutral,
                        value.scores.negative
                    ));
                    lines.push(format!(
                        "           \"{}\"",
                        preview(&record.text, TEXT_PREVIEW_CHARS)
                    ));
                }
                DocumentOutcome::Failed { error } => lines.push(self.error_line(error)),
            }
        }

        lines.push(String::new());
        lines.push("-- Key Phrase Extraction --".to_string());
        for record in &report.key_phrases {
            match &record.outcome {
                DocumentOutcome::Success(value) => {
                    lines.push(format!("  Phrases: {}", value.key_phrases.join(", ")))
                }
                DocumentOutcome::Failed { error } => lines.push(self.error_line(error)),
            }
        }

        lines.push(String::new());
        lines.push("-- Named Entity Recognition --".to_string());
        for record in &report.entities {
            match &record.outcome {
                DocumentOutcome::Success(value) => {
                    for entity in &value.entities {
                        lines.push(format!(
                            "  • {} [{}] (confidence: {})",
                            entity.text,
                            entity.category,
                            percent(entity.confidence)
                        ));
                    }
                    lines.push(String::new());
                }
                DocumentOutcome::Failed { error } => lines.push(self.error_line(error)),
            }
        }

        lines.join("\n")
    }

    fn text_report_table(&self, report: &TextReport) -> String {
        let mut sentiment = Builder::default();
        sentiment.push_record(["Text", "Sentiment", "Positive", "Neutral", "Negative"]);
        for record in &report.sentiment {
            let text = preview(&record.text, TABLE_TEXT_CHARS);
            match &record.outcome {
                DocumentOutcome::Success(value) => sentiment.push_record([
                    text,
                    value.sentiment.to_string(),
                    format!("{:.4}", value.scores.positive),
                    format!("{:.4}", value.scores.neutral),
                    format!("{:.4}", value.scores.negative),
                ]),
                DocumentOutcome::Failed { error } => sentiment.push_record([
                    text,
                    format!("error: {}", error),
                    String::new(),
                    String::new(),
                    String::new(),
                ]),
            }
        }

        let mut phrases = Builder::default();
        phrases.push_record(["Text", "Key Phrases"]);
        for record in &report.key_phrases {
            let text = preview(&record.text, TABLE_TEXT_CHARS);
            match &record.outcome {
                DocumentOutcome::Success(value) => {
                    phrases.push_record([text, value.key_phrases.join(", ")])
                }
                DocumentOutcome::Failed { error } => {
                    phrases.push_record([text, format!("error: {}", error)])
                }
            }
        }

        let mut entities = Builder::default();
        entities.push_record(["Text", "Entity", "Category", "Confidence"]);
        for record in &report.entities {
            let text = preview(&record.text, TABLE_TEXT_CHARS);
            match &record.outcome {
                DocumentOutcome::Success(value) => {
                    for entity in &value.entities {
                        entities.push_record([
                            text.clone(),
                            entity.text.clone(),
                            entity.category.clone(),
                            format!("{:.4}", entity.confidence),
                        ]);
                    }
                }
                DocumentOutcome::Failed { error } => entities.push_record([
                    text,
                    format!("error: {}", error),
                    String::new(),
                    String::new(),
                ]),
            }
        }

        [
            render(sentiment),
            render(phrases),
            render(entities),
        ]
        .join("\n\n")
    }

    fn image_text(&self, analysis: &ImageAnalysis) -> String {
        let mut lines = vec!["Captions:".to_string()];
        for caption in &analysis.captions {
            lines.push(format!(
                "  • {}  (confidence: {})",
                caption.text,
                percent(caption.confidence)
            ));
        }

        lines.push(String::new());
        lines.push("Top Tags:".to_string());
        for tag in analysis.tags.iter().take(self.tag_limit) {
            lines.push(format!(
                "  • {}  (confidence: {})",
                tag.name,
                percent(tag.confidence)
            ));
        }

        lines.push(String::new());
        lines.push("Detected Objects:".to_string());
        for object in &analysis.objects {
            lines.push(format!(
                "  • {}  (confidence: {})",
                object.object,
                percent(object.confidence)
            ));
        }

        lines.join("\n")
    }

    fn image_table(&self, analysis: &ImageAnalysis) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Kind", "Label", "Confidence", "Rectangle"]);

        for caption in &analysis.captions {
            builder.push_record([
                "caption".to_string(),
                caption.text.clone(),
                format!("{:.4}", caption.confidence),
                String::new(),
            ]);
        }
        for tag in analysis.tags.iter().take(self.tag_limit) {
            builder.push_record([
                "tag".to_string(),
                tag.name.clone(),
                format!("{:.4}", tag.confidence),
                String::new(),
            ]);
        }
        for object in &analysis.objects {
            let r = object.rectangle;
            builder.push_record([
                "object".to_string(),
                object.object.clone(),
                format!("{:.4}", object.confidence),
                format!("({}, {}) {}x{}", r.x, r.y, r.w, r.h),
            ]);
        }

        render(builder)
    }

    fn error_line(&self, error: &str) -> String {
        self.colorize(&format!("  ERROR: {}", error), Color::Red)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

fn sentiment_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Neutral => Color::Yellow,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Mixed => Color::Magenta,
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn percent(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}
