// src/utils.rs
use chrono::{SecondsFormat, Utc};

/// Split a comma-separated field, trimming entries and dropping empty ones
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Fresh identifier for newly appended documents
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Append `value` unless an equal entry is already present, keeping first-seen order
pub fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// True when a required text field is absent or blank
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}
