//! Wire payloads exchanged with the fact-checking service.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ServiceError;

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub claim: String,
}

impl PredictRequest {
    pub fn new(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
        }
    }
}

/// Body returned by `POST /predict`
///
/// Every field is optional on the wire. Converting with `Verdict::from`
/// fills the gaps with defaults; `Verdict::strict` rejects a body missing
/// `isTrue` or `confidence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_true: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PredictResponse {
    pub fn new(is_true: bool, confidence: f64) -> Self {
        Self {
            is_true: Some(is_true),
            confidence: Some(confidence),
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// A verdict the service returned for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_true: bool,
    /// Confidence score, nominally 0-100
    pub confidence: f64,
    pub status: String,
}

impl Verdict {
    /// Upper-case label printed on the console
    pub const fn label(&self) -> &'static str {
        if self.is_true {
            "TRUE"
        } else {
            "FALSE"
        }
    }
}

impl Verdict {
    /// Convert a response that must carry both `isTrue` and `confidence`
    pub fn strict(resp: PredictResponse) -> Result<Self, ServiceError> {
        let missing = |field: &str| ServiceError::Decode {
            message: format!("missing field `{field}` in prediction response"),
        };
        let is_true = resp.is_true.ok_or_else(|| missing("isTrue"))?;
        let confidence = resp.confidence.ok_or_else(|| missing("confidence"))?;

        Ok(Self {
            is_true,
            confidence,
            status: resp.status.unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

/// Lenient conversion: missing `isTrue` reads as false, missing
/// `confidence` as 0, missing `status` as `"unknown"`
impl From<PredictResponse> for Verdict {
    fn from(resp: PredictResponse) -> Self {
        Self {
            is_true: resp.is_true.unwrap_or(false),
            confidence: resp.confidence.unwrap_or(0.0),
            status: resp.status.unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// A 200 answer from `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Raw response body
    pub body: String,
    /// Value of the `status` field if the body was a JSON object carrying one
    pub status: Option<String>,
}

impl HealthStatus {
    /// Build from a raw body, reading `status` if the body is JSON
    pub fn from_body(body: String) -> Self {
        let status = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("status")?.as_str().map(str::to_string));
        Self { body, status }
    }

    /// True when the body reports `"status": "healthy"`
    pub fn reports_healthy(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }
}

/// Render a confidence score the way the service sent it (`97`, `87.5`)
pub fn format_confidence(confidence: f64) -> String {
    format!("{confidence}%")
}
