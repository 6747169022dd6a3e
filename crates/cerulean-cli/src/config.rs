//! Configuration management for the CLI.
//!
//! Service credentials come from command-line flags or the environment first.
//! The optional TOML file is consulted only for values that are still absent.

use crate::error::Result;
use cerulean_azure::{ConfigError, LanguageConfig, OpenAiConfig, VisionConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Azure AI Language section
    #[serde(default)]
    pub language: LanguageSection,

    /// Azure OpenAI section
    #[serde(default)]
    pub openai: OpenAiSection,

    /// Azure AI Vision section
    #[serde(default)]
    pub vision: VisionSection,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Number of tags shown by the vision command
    #[serde(default = "default_tag_limit")]
    pub tag_limit: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console layout
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// `[language]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageSection {
    /// Endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Subscription key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Document language hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// `[openai]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenAiSection {
    /// Endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Default deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
}

/// `[vision]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionSection {
    /// Endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Subscription key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Config {
    /// Default configuration file path, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".cerulean").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is read
    /// when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Language configuration from flag/env values, falling back to `[language]`.
    pub fn language_config(
        &self,
        endpoint: Option<String>,
        key: Option<String>,
        language: Option<String>,
    ) -> std::result::Result<LanguageConfig, ConfigError> {
        let config = LanguageConfig::new(
            endpoint.or_else(|| self.language.endpoint.clone()),
            key.or_else(|| self.language.key.clone()),
        )?;

        Ok(match language.or_else(|| self.language.language.clone()) {
            Some(language) => config.with_language(language),
            None => config,
        })
    }

    /// Azure OpenAI configuration from flag/env values, falling back to `[openai]`.
    pub fn openai_config(
        &self,
        endpoint: Option<String>,
        key: Option<String>,
        deployment: Option<String>,
    ) -> std::result::Result<OpenAiConfig, ConfigError> {
        OpenAiConfig::new(
            endpoint.or_else(|| self.openai.endpoint.clone()),
            key.or_else(|| self.openai.key.clone()),
            deployment.or_else(|| self.openai.deployment.clone()),
        )
    }

    /// Vision configuration from flag/env values, falling back to `[vision]`.
    pub fn vision_config(
        &self,
        endpoint: Option<String>,
        key: Option<String>,
    ) -> std::result::Result<VisionConfig, ConfigError> {
        VisionConfig::new(
            endpoint.or_else(|| self.vision.endpoint.clone()),
            key.or_else(|| self.vision.key.clone()),
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            tag_limit: default_tag_limit(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_tag_limit() -> usize {
    8
}
