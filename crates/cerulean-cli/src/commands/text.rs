//! Text command implementation.

use crate::cli::TextArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{Formatter, TextReport};
use cerulean_adapters::TextAnalyzer;
use cerulean_azure::LanguageClient;
use cerulean_domain::traits::TextAnalyticsService;
use std::fmt;

/// Documents analyzed when none are given
pub const DEMO_DOCUMENTS: [&str; 3] = [
    "Azure AI services are incredibly powerful and easy to integrate into Python apps.",
    "I had a terrible experience with the slow API response times last week.",
    "Microsoft's cognitive services include vision, language, and speech capabilities.",
];

/// Execute the text command.
pub fn execute_text(args: TextArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let language = config.language_config(args.endpoint, args.key, args.language)?;
    let analyzer = TextAnalyzer::new(LanguageClient::new(&language));

    let documents = if args.documents.is_empty() {
        DEMO_DOCUMENTS.iter().map(|d| d.to_string()).collect()
    } else {
        args.documents
    };

    let report = analyze(&analyzer, &documents)?;

    if let Some(banner) = formatter.banner("Azure AI Language: Text Analytics") {
        println!("{}", banner);
    }
    println!("{}", formatter.format_text_report(&report)?);

    Ok(())
}

/// Run all three text operations over one batch.
pub fn analyze<S>(analyzer: &TextAnalyzer<S>, documents: &[String]) -> Result<TextReport>
where
    S: TextAnalyticsService,
    S::Error: fmt::Display,
{
    Ok(TextReport {
        sentiment: analyzer.analyze_sentiment(documents)?,
        key_phrases: analyzer.extract_key_phrases(documents)?,
        entities: analyzer.recognize_entities(documents)?,
    })
}
