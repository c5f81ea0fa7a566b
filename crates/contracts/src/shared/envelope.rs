//! Uniform response wrapper returned by every backend endpoint

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("backend error {code}: {description}")]
    Backend { code: String, description: String },
    #[error("backend reported success without a payload")]
    EmptyPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default = "Option::default")]
    pub response_dto: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            status: true,
            error_code: None,
            error_description: None,
            response_dto: Some(payload),
        }
    }

    pub fn error(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: false,
            error_code: Some(code.into()),
            error_description: Some(description.into()),
            response_dto: None,
        }
    }

    /// Payload of a successful response, `None` allowed
    pub fn into_optional(self) -> Result<Option<T>, EnvelopeError> {
        if self.status {
            Ok(self.response_dto)
        } else {
            Err(EnvelopeError::Backend {
                code: self.error_code.unwrap_or_else(|| "UNKNOWN".to_string()),
                description: self
                    .error_description
                    .unwrap_or_else(|| "no description".to_string()),
            })
        }
    }

    /// Payload of a successful response, which must be present
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        self.into_optional()?.ok_or(EnvelopeError::EmptyPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{
            "status": true,
            "errorCode": null,
            "errorDescription": null,
            "responseDto": {"id": 7}
        }"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_result().unwrap()["id"], 7);
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{
            "status": false,
            "errorCode": "CUS-404",
            "errorDescription": "Customer not found"
        }"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_result().unwrap_err(),
            EnvelopeError::Backend {
                code: "CUS-404".to_string(),
                description: "Customer not found".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_payload() {
        let json = r#"{"status":true}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(response.clone().into_optional().unwrap(), None);
        assert_eq!(response.into_result().unwrap_err(), EnvelopeError::EmptyPayload);
    }
}
