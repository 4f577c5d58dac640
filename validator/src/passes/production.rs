use serde::Serialize;
use serde_json::{Map, Value};

use crate::result::{Status, deduction, penalized};

/// Notebooks above this size get a warning.
pub const LARGE_FILE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionResult {
    pub metadata_complete: bool,
    pub repo_configured: bool,
    pub issues: Vec<String>,
    pub status: Status,
    pub score: u8,
}

/// Check notebook-level metadata and file size.
pub fn validate_production(
    metadata: &Map<String, Value>,
    required_fields: &[String],
    stored_size: Option<u64>,
) -> ProductionResult {
    let mut issues: Vec<String> = required_fields
        .iter()
        .filter(|field| !metadata.contains_key(field.as_str()))
        .map(|field| format!("Missing metadata field: {field}"))
        .collect();

    if metadata.get("repo").is_some_and(|repo| !is_plausible_url(repo)) {
        issues.push("Repository URL should be valid URL".to_string());
    }

    if let Some(bytes) = stored_size.filter(|bytes| *bytes > LARGE_FILE_BYTES) {
        let mib = bytes as f64 / (1024.0 * 1024.0);
        issues.push(format!("Large file size: {mib:.1}MB (consider optimization)"));
    }

    ProductionResult {
        metadata_complete: issues.is_empty(),
        repo_configured: metadata.contains_key("repo"),
        status: Status::unless_issues(issues.len(), Status::Warn),
        score: penalized(deduction(issues.len(), 15)),
        issues,
    }
}

/// Empty or falsy values pass unchecked; anything else must be a string
/// starting with `http`.
fn is_plausible_url(repo: &Value) -> bool {
    match repo {
        Value::String(url) => url.is_empty() || url.starts_with("http"),
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(true) => false,
    }
}
