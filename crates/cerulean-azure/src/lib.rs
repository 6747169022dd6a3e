//! Cerulean Azure Provider Layer
//!
//! Azure AI service implementations of the traits in `cerulean_domain::traits`.
//!
//! # Providers
//!
//! - [`LanguageClient`]: Azure AI Language text analytics (sentiment, key phrases, entities)
//! - [`OpenAiClient`]: Azure OpenAI chat completions
//! - [`VisionClient`]: Azure AI Vision image analysis
//! - [`mock`]: deterministic providers for testing, no network calls
//!
//! Every client is built from a configuration value object that is resolved
//! once at start-up. Missing credentials fail at resolution time, before any
//! request is made.
//!
//! # Examples
//!
//! ```no_run
//! use cerulean_azure::{LanguageClient, LanguageConfig};
//! use cerulean_domain::traits::TextAnalyticsService;
//!
//! let config = LanguageConfig::from_env()?;
//! let client = LanguageClient::new(&config);
//! let results = client.analyze_sentiment(&["Azure AI is great!".to_string()])?;
//! assert_eq!(results.len(), 1);
//! # Ok::<(), cerulean_azure::AzureError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
mod http;
pub mod language;
pub mod mock;
pub mod openai;
pub mod vision;

pub use config::{ConfigError, LanguageConfig, OpenAiConfig, ServiceCredentials, VisionConfig};
pub use error::{AzureError, Result};
pub use language::LanguageClient;
pub use mock::{MockChatCompletions, MockTextAnalytics, MockVision};
pub use openai::OpenAiClient;
pub use vision::VisionClient;
