//! Wire contracts for the PathoScope dashboard.
//!
//! This crate defines the JSON shapes exchanged between the web UI and an
//! inference backend implementing the `/predict` contract, so the frontend
//! and the development server cannot drift apart.

use serde::{Deserialize, Serialize};

/// In-band status value marking a successful run.
pub const STATUS_SUCCESS: &str = "success";
/// In-band status value marking a failed run (reported with HTTP 200).
pub const STATUS_ERROR: &str = "error";

/// Classification result returned by `POST {backend}/predict`.
///
/// Backends vary in how much they fill in: an error reply typically carries
/// only `status` and `message`, and some omit `status` entirely on success.
/// Every field therefore tolerates being absent on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// `"success"` or `"error"`; treated as success when omitted.
    #[serde(default = "default_status")]
    pub status: String,
    /// Class label, e.g. `"Metastatic"` or `"Normal"`.
    #[serde(default)]
    pub prediction: String,
    /// Percentage string, e.g. `"87.42%"`. Carried opaquely: the UI uses it
    /// both as display text and as a CSS width, never as a number.
    #[serde(default)]
    pub confidence: String,
    /// Human-readable explanation line, or the error detail on failure.
    #[serde(default)]
    pub message: String,
    /// Grad-CAM overlay as an image reference (data URL), when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<String>,
}

fn default_status() -> String {
    STATUS_SUCCESS.to_string()
}

impl PredictResponse {
    /// Build a successful classification reply.
    pub fn success(
        prediction: impl Into<String>,
        confidence: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            prediction: prediction.into(),
            confidence: confidence.into(),
            message: message.into(),
            heatmap: None,
        }
    }

    /// Build an in-band error reply (HTTP 200, `status: "error"`).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            prediction: String::new(),
            confidence: String::new(),
            message: message.into(),
            heatmap: None,
        }
    }

    /// Attach a heatmap overlay reference.
    pub fn with_heatmap(mut self, data_url: impl Into<String>) -> Self {
        self.heatmap = Some(data_url.into());
        self
    }

    /// Whether the backend flagged this run as failed in-band.
    pub fn is_error(&self) -> bool {
        self.status == STATUS_ERROR
    }
}

/// Error body for non-2xx replies from the development server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create an error with a message and a machine-readable code.
    pub fn with_code(message: impl Into<String>, code: &str) -> Self {
        Self {
            message: message.into(),
            code: Some(code.to_string()),
        }
    }
}

/// Reply shape for the development server's `GET /health` probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub analyses_served: u64,
}

/// Normalize a user-entered backend base address: strip surrounding
/// whitespace and any trailing slashes.
pub fn normalize_backend_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Full URL for the prediction endpoint of a user-entered base address.
pub fn predict_endpoint(raw: &str) -> String {
    format!("{}/predict", normalize_backend_url(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_round_trip() {
        let resp = PredictResponse::success(
            "Metastatic",
            "91.20%",
            "Tissue patterns align with metastatic characteristics.",
        )
        .with_heatmap("data:image/png;base64,AAAA");

        let json = serde_json::to_string(&resp).unwrap();
        let parsed: PredictResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, resp);
        assert!(!parsed.is_error());
    }

    #[test]
    fn test_error_response_is_error() {
        let resp = PredictResponse::error("cannot identify image file");

        assert!(resp.is_error());
        assert_eq!(resp.message, "cannot identify image file");
        assert!(resp.heatmap.is_none());
    }

    #[test]
    fn test_missing_status_treated_as_success() {
        // Some backends omit the in-band status on success.
        let json = r#"{"prediction":"Normal","confidence":"64.00%","message":"ok"}"#;
        let parsed: PredictResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.status, STATUS_SUCCESS);
        assert!(!parsed.is_error());
        assert!(parsed.heatmap.is_none());
    }

    #[test]
    fn test_sparse_error_body_deserializes() {
        // FastAPI-style error replies carry only status and message.
        let json = r#"{"status":"error","message":"boom"}"#;
        let parsed: PredictResponse = serde_json::from_str(json).unwrap();

        assert!(parsed.is_error());
        assert_eq!(parsed.prediction, "");
        assert_eq!(parsed.confidence, "");
    }

    #[test]
    fn test_heatmap_omitted_when_none() {
        let resp = PredictResponse::success("Normal", "55.00%", "ok");
        let json = serde_json::to_string(&resp).unwrap();

        assert!(!json.contains("heatmap"));
    }

    #[test]
    fn test_api_error_with_code() {
        let err = ApiError::with_code("file field missing", "MISSING_FILE");

        let json = serde_json::to_string(&err).unwrap();
        let parsed: ApiError = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.code.as_deref(), Some("MISSING_FILE"));
        assert_eq!(parsed.message, "file field missing");
    }

    #[test]
    fn test_health_response_serialization() {
        let health = HealthResponse {
            status: "ok".to_string(),
            uptime_secs: 12,
            analyses_served: 3,
        };

        let json = serde_json::to_string(&health).unwrap();
        let parsed: HealthResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, health);
    }

    #[test]
    fn test_normalize_backend_url() {
        assert_eq!(
            normalize_backend_url("https://demo.trycloudflare.com/"),
            "https://demo.trycloudflare.com"
        );
        assert_eq!(
            normalize_backend_url("  http://localhost:8000  "),
            "http://localhost:8000"
        );
        assert_eq!(normalize_backend_url("http://host//"), "http://host");
    }

    #[test]
    fn test_predict_endpoint() {
        assert_eq!(
            predict_endpoint("https://demo.trycloudflare.com/"),
            "https://demo.trycloudflare.com/predict"
        );
    }
}
