//! Cerulean Adapters
//!
//! Turns raw remote-service results into normalized, typed records.
//!
//! # Overview
//!
//! Three independent adapters share one pattern: submit the request through a
//! service trait, then map each remote result into a record, per item, in
//! the caller's order.
//!
//! ```text
//! inputs → adapter → service (one call) → raw results → normalized records
//! ```
//!
//! - [`TextAnalyzer`]: sentiment, key phrases and entities for a batch of
//!   documents; a document the service rejects becomes an error record
//! - [`ChatAdapter`]: one reply string for a conversation
//! - [`ImageAnalyzer`]: captions, tags and objects for one image
//!
//! Every confidence score is rounded to four decimal places.
//!
//! # Example Usage
//!
//! ```
//! use cerulean_adapters::TextAnalyzer;
//! use cerulean_azure::MockTextAnalytics;
//!
//! let service = MockTextAnalytics::new().with_key_phrases(vec![Ok(vec!["Azure AI".to_string()])]);
//! let analyzer = TextAnalyzer::new(service);
//!
//! let records = analyzer.extract_key_phrases(&["Azure AI is great!".to_string()])?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].value().unwrap().key_phrases, vec!["Azure AI"]);
//! # Ok::<(), cerulean_adapters::AdapterError>(())
//! ```

#![warn(missing_docs)]

mod chat;
mod error;
mod image;
mod text;

pub use chat::{
    resolve_deployment, ChatAdapter, DEFAULT_DEPLOYMENT, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use error::AdapterError;
pub use image::{ImageAnalyzer, REQUESTED_FEATURES};
pub use text::TextAnalyzer;
