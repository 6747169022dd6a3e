//! Service configuration.
//!
//! Each service needs an endpoint and a key. Values are resolved once, from
//! explicit arguments or the process environment, into immutable config
//! objects that clients borrow at construction time.

use std::fmt;
use thiserror::Error;

/// Environment variable holding the Language endpoint
pub const LANGUAGE_ENDPOINT_VAR: &str = "AZURE_LANGUAGE_ENDPOINT";
/// Environment variable holding the Language key
pub const LANGUAGE_KEY_VAR: &str = "AZURE_LANGUAGE_KEY";
/// Environment variable holding the Azure OpenAI endpoint
pub const OPENAI_ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
/// Environment variable holding the Azure OpenAI key
pub const OPENAI_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
/// Environment variable holding the default chat deployment
pub const OPENAI_DEPLOYMENT_VAR: &str = "AZURE_OPENAI_DEPLOYMENT";
/// Environment variable holding the Vision endpoint
pub const VISION_ENDPOINT_VAR: &str = "AZURE_VISION_ENDPOINT";
/// Environment variable holding the Vision key
pub const VISION_KEY_VAR: &str = "AZURE_VISION_KEY";

/// Azure OpenAI REST API version
pub const DEFAULT_OPENAI_API_VERSION: &str = "2024-02-01";

/// Document language sent with text analytics requests
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required value absent or blank
    #[error("Missing required configuration: {0}")]
    MissingVar(String),

    /// Endpoint is not an http(s) URL
    #[error("Invalid endpoint '{0}': expected an http:// or https:// URL")]
    InvalidEndpoint(String),
}

/// Endpoint and key for one service
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredentials {
    endpoint: String,
    key: String,
}

impl ServiceCredentials {
    /// Validate an endpoint/key pair
    ///
    /// `endpoint_name` and `key_name` are used in the error message so the
    /// user knows which variable to set.
    pub fn resolve(
        endpoint: Option<String>,
        key: Option<String>,
        endpoint_name: &str,
        key_name: &str,
    ) -> Result<Self, ConfigError> {
        let endpoint = non_blank(endpoint)
            .ok_or_else(|| ConfigError::MissingVar(endpoint_name.to_string()))?;
        let key = non_blank(key).ok_or_else(|| ConfigError::MissingVar(key_name.to_string()))?;

        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key,
        })
    }

    /// Endpoint without a trailing slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Subscription key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("endpoint", &self.endpoint)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Azure AI Language configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Endpoint and key
    pub credentials: ServiceCredentials,
    /// Language hint sent with every document
    pub language: String,
}

impl LanguageConfig {
    /// Build from explicit values
    pub fn new(endpoint: Option<String>, key: Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            credentials: ServiceCredentials::resolve(
                endpoint,
                key,
                LANGUAGE_ENDPOINT_VAR,
                LANGUAGE_KEY_VAR,
            )?,
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    /// Build from `AZURE_LANGUAGE_ENDPOINT` and `AZURE_LANGUAGE_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(LANGUAGE_ENDPOINT_VAR), lookup(LANGUAGE_KEY_VAR))
    }

    /// Override the document language hint
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Azure OpenAI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    /// Endpoint and key
    pub credentials: ServiceCredentials,
    /// Configured default deployment, if any
    pub deployment: Option<String>,
    /// REST API version
    pub api_version: String,
}

impl OpenAiConfig {
    /// Build from explicit values
    pub fn new(
        endpoint: Option<String>,
        key: Option<String>,
        deployment: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            credentials: ServiceCredentials::resolve(
                endpoint,
                key,
                OPENAI_ENDPOINT_VAR,
                OPENAI_KEY_VAR,
            )?,
            deployment: non_blank(deployment),
            api_version: DEFAULT_OPENAI_API_VERSION.to_string(),
        })
    }

    /// Build from `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY` and the
    /// optional `AZURE_OPENAI_DEPLOYMENT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup(OPENAI_ENDPOINT_VAR),
            lookup(OPENAI_KEY_VAR),
            lookup(OPENAI_DEPLOYMENT_VAR),
        )
    }
}

/// Azure AI Vision configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionConfig {
    /// Endpoint and key
    pub credentials: ServiceCredentials,
}

impl VisionConfig {
    /// Build from explicit values
    pub fn new(endpoint: Option<String>, key: Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            credentials: ServiceCredentials::resolve(
                endpoint,
                key,
                VISION_ENDPOINT_VAR,
                VISION_KEY_VAR,
            )?,
        })
    }

    /// Build from `AZURE_VISION_ENDPOINT` and `AZURE_VISION_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(VISION_ENDPOINT_VAR), lookup(VISION_KEY_VAR))
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_language_config_from_lookup() {
        let config = LanguageConfig::from_lookup(lookup_from(&[
            (LANGUAGE_ENDPOINT_VAR, "https://test.cognitiveservices.azure.com/"),
            (LANGUAGE_KEY_VAR, "test-key"),
        ]))
        .unwrap();

        assert_eq!(
            config.credentials.endpoint(),
            "https://test.cognitiveservices.azure.com"
        );
        assert_eq!(config.credentials.key(), "test-key");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_missing_endpoint() {
        let result = VisionConfig::from_lookup(lookup_from(&[(VISION_KEY_VAR, "k")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar(VISION_ENDPOINT_VAR.to_string())
        );
    }

    #[test]
    fn test_blank_key_is_missing() {
        let result = LanguageConfig::new(
            Some("https://test.cognitiveservices.azure.com".to_string()),
            Some("   ".to_string()),
        );
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVar(LANGUAGE_KEY_VAR.to_string())
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = VisionConfig::new(Some("not-a-url".to_string()), Some("k".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_openai_deployment_optional() {
        let config = OpenAiConfig::from_lookup(lookup_from(&[
            (OPENAI_ENDPOINT_VAR, "https://test.openai.azure.com/"),
            (OPENAI_KEY_VAR, "test-key"),
        ]))
        .unwrap();
        assert!(config.deployment.is_none());
        assert_eq!(config.api_version, DEFAULT_OPENAI_API_VERSION);

        let config = OpenAiConfig::from_lookup(lookup_from(&[
            (OPENAI_ENDPOINT_VAR, "https://test.openai.azure.com/"),
            (OPENAI_KEY_VAR, "test-key"),
            (OPENAI_DEPLOYMENT_VAR, "gpt-4o"),
        ]))
        .unwrap();
        assert_eq!(config.deployment.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = ServiceCredentials::resolve(
            Some("https://x.azure.com".to_string()),
            Some("super-secret".to_string()),
            "E",
            "K",
        )
        .unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
