//! Request and response payloads for the `/process` flow.
//!
//! `ProcessRequest` is what the form submits, `ProcessAck` is the JSON reply
//! of `POST /process`, and `ProcessDataResponse`/`ProcessedResult` describe
//! the asynchronous result served by `GET /api/process-data/:id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::requirement::RequirementBlock;

/// Full job submission payload. `requirements` is always serialized, even
/// as an empty list, because the backend reads every key unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub geo: Vec<String>,
    pub exclude_keywords: String,
    pub sheet_url: String,
    pub company_geo: bool,
    pub sup_emails_sheet_url: String,
    pub sup_domains_sheet_url: String,
    pub sup_names_sheet_url: String,
    pub goal: String,
    pub lpc: String,
    pub size: String,
    pub industry: Vec<String>,
    pub revenue: String,
    pub requirements: Vec<RequirementBlock>,
    pub process_type: Option<String>,
}

/// JSON body of a `POST /process` reply. Both the success and the error
/// shape land here, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub entry_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope of `GET /api/process-data/:id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessDataResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ProcessedResult>,
}

/// The processed outcome of one entry, rendered as tag lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedResult {
    #[serde(default)]
    pub entry_id: Option<String>,
    #[serde(default)]
    pub entry_name: String,
    #[serde(default)]
    pub job_levels: Vec<String>,
    #[serde(default)]
    pub job_functions: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub geo_locations: Value,
    #[serde(default)]
    pub processed_at: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ProcessedResult {
    /// Normalizes `geo_locations`, which the backend delivers in several
    /// shapes: a JSON list, a string holding a JSON list, a comma-separated
    /// string, or a lone scalar.
    pub fn geo_list(&self) -> Vec<String> {
        match &self.geo_locations {
            Value::Array(items) => items.iter().map(value_to_text).collect(),
            Value::String(raw) => match serde_json::from_str::<Vec<String>>(raw) {
                Ok(parsed) => parsed,
                Err(_) => raw
                    .split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect(),
            },
            Value::Null => Vec::new(),
            other => vec![value_to_text(other)],
        }
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_geo(geo: Value) -> ProcessedResult {
        ProcessedResult {
            geo_locations: geo,
            ..ProcessedResult::default()
        }
    }

    #[test]
    fn geo_list_accepts_a_plain_list() {
        let result = result_with_geo(serde_json::json!(["US", "UK"]));
        assert_eq!(result.geo_list(), vec!["US", "UK"]);
    }

    #[test]
    fn geo_list_parses_a_json_string() {
        let result = result_with_geo(Value::String(r#"["US","UK"]"#.to_string()));
        assert_eq!(result.geo_list(), vec!["US", "UK"]);
    }

    #[test]
    fn geo_list_splits_a_comma_string() {
        let result = result_with_geo(Value::String("US, UK".to_string()));
        assert_eq!(result.geo_list(), vec!["US", "UK"]);
    }

    #[test]
    fn geo_list_wraps_a_lone_value() {
        let result = result_with_geo(Value::String("US".to_string()));
        assert_eq!(result.geo_list(), vec!["US"]);

        let result = result_with_geo(serde_json::json!(42));
        assert_eq!(result.geo_list(), vec!["42"]);
    }

    #[test]
    fn geo_list_is_empty_when_missing() {
        let result = result_with_geo(Value::Null);
        assert!(result.geo_list().is_empty());
    }

    #[test]
    fn empty_request_still_serializes_requirements() {
        let value = serde_json::to_value(ProcessRequest::default()).unwrap();
        assert_eq!(value["requirements"], serde_json::json!([]));
        assert_eq!(value["process_type"], Value::Null);
    }

    #[test]
    fn ack_parses_both_shapes() {
        let ok: ProcessAck =
            serde_json::from_str(r#"{"success":true,"entry_id":"ab12","message":"Processing started"}"#)
                .unwrap();
        assert_eq!(ok.entry_id.as_deref(), Some("ab12"));

        let denied: ProcessAck = serde_json::from_str(r#"{"error":"no_edit"}"#).unwrap();
        assert!(!denied.success);
        assert_eq!(denied.error.as_deref(), Some("no_edit"));
    }
}
