use crate::Details;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gathering modes an audit can run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditMode {
    Navigation,
    Timespan,
    Snapshot,
}

/// How the score of an audit is meant to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    /// Pass (1) or fail (0).
    Binary,
    /// The audit could not run.
    Error,
}

/// Static description of an audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub id: &'static str,
    /// Shown when the audit passes.
    pub title: &'static str,
    /// Shown when the audit fails.
    pub failure_title: &'static str,
    pub description: &'static str,
    pub supported_modes: &'static [AuditMode],
    pub score_display_mode: ScoreDisplayMode,
    pub guidance_level: u8,
    pub required_artifacts: &'static [&'static str],
}

/// What an audit returns for one set of artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProduct {
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl AuditProduct {
    /// A passing result with nothing further to report.
    pub fn pass() -> Self {
        Self {
            score: 1.0,
            display_value: None,
            details: None,
        }
    }

    pub fn is_passing(&self) -> bool {
        self.score >= 1.0
    }
}

/// An audit result combined with its metadata, ready for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `None` when the audit errored.
    pub score: Option<f64>,
    pub score_display_mode: ScoreDisplayMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AuditReport {
    pub fn from_product(meta: &AuditMeta, product: AuditProduct) -> Self {
        let title = if product.is_passing() {
            meta.title
        } else {
            meta.failure_title
        };
        Self {
            id: meta.id.to_string(),
            title: title.to_string(),
            description: meta.description.to_string(),
            score: Some(product.score),
            score_display_mode: meta.score_display_mode,
            display_value: product.display_value,
            details: product.details,
            error_message: None,
        }
    }

    pub fn errored(meta: &AuditMeta, message: String) -> Self {
        Self {
            id: meta.id.to_string(),
            title: meta.title.to_string(),
            description: meta.description.to_string(),
            score: None,
            score_display_mode: ScoreDisplayMode::Error,
            display_value: None,
            details: None,
            error_message: Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        self.score_display_mode == ScoreDisplayMode::Error
    }
}

/// Output of running a set of audits over one artifact bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_time: Option<DateTime<Utc>>,
    pub audits: Vec<AuditReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const META: AuditMeta = AuditMeta {
        id: "sample",
        title: "Sample passed",
        failure_title: "Sample failed",
        description: "A sample audit.",
        supported_modes: &[AuditMode::Navigation],
        score_display_mode: ScoreDisplayMode::Binary,
        guidance_level: 1,
        required_artifacts: &[],
    };

    #[test]
    fn test_pass_serializes_to_score_only() {
        let value = serde_json::to_value(AuditProduct::pass()).unwrap();
        assert_eq!(value, json!({"score": 1.0}));
    }

    #[test]
    fn test_report_title_follows_score() {
        let passed = AuditReport::from_product(&META, AuditProduct::pass());
        assert_eq!(passed.title, "Sample passed");

        let failed = AuditReport::from_product(
            &META,
            AuditProduct {
                score: 0.0,
                display_value: Some("1 thing".to_string()),
                details: None,
            },
        );
        assert_eq!(failed.title, "Sample failed");
        assert_eq!(failed.display_value.as_deref(), Some("1 thing"));
    }

    #[test]
    fn test_score_display_mode_wire_names() {
        let report = AuditReport::from_product(&META, AuditProduct::pass());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["scoreDisplayMode"], json!("binary"));
        assert!(!report.is_error());

        let mode: ScoreDisplayMode = serde_json::from_value(json!("error")).unwrap();
        assert_eq!(mode, ScoreDisplayMode::Error);
    }

    #[test]
    fn test_errored_report() {
        let report = AuditReport::errored(&META, "boom".to_string());
        assert!(report.is_error());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["score"], json!(null));
        assert_eq!(value["scoreDisplayMode"], json!("error"));
        assert_eq!(value["errorMessage"], json!("boom"));
    }
}
