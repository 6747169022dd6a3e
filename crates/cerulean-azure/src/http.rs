//! Shared response handling for the Azure clients.

use crate::error::AzureError;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Header carrying the key for Cognitive Services endpoints
pub(crate) const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header carrying the key for Azure OpenAI endpoints
pub(crate) const API_KEY_HEADER: &str = "api-key";

/// Standard Azure error envelope
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Check the status and decode a JSON body
pub(crate) fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AzureError> {
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(AzureError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Pull the message out of an Azure error body, falling back to the raw text
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.code {
            Some(code) => format!("{} ({})", envelope.error.message, code),
            None => envelope.error.message,
        },
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"error":{"code":"401","message":"Access denied due to invalid subscription key."}}"#;
        assert_eq!(
            error_message(body),
            "Access denied due to invalid subscription key. (401)"
        );
    }

    #[test]
    fn test_error_message_without_code() {
        let body = r#"{"error":{"message":"Deployment not found"}}"#;
        assert_eq!(error_message(body), "Deployment not found");
    }

    #[test]
    fn test_error_message_raw_body() {
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(""), "Unknown error");
    }
}
