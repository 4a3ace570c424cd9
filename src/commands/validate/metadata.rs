use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::{Map, Value};

use crate::contract::{
    ALLOWED_HC_TYPES, EXPECTED_HC_VERSION, METADATA_BLOCK_ID, REQUIRED_METADATA_FIELDS,
    SUMMARY_MIN_TOKENS, SUMMARY_TARGET_TOKENS, TIMESTAMP_FIELDS, artifact_id_pattern,
};
use crate::model::ValidationResult;

pub type Metadata = Map<String, Value>;

static ARTIFACT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&artifact_id_pattern()).expect("valid artifact id regex"));

/// Parses the metadata block and runs every field check. A parse failure records a
/// single error and nothing else.
pub fn validate_metadata(raw: &str, result: &mut ValidationResult) {
    let metadata = match parse_metadata(raw) {
        Ok(metadata) => metadata,
        Err(err) => {
            result.error(format!("Invalid JSON in {METADATA_BLOCK_ID}: {err}"));
            return;
        }
    };

    check_required_fields(&metadata, result);
    check_hc_version(&metadata, result);
    check_hc_type(&metadata, result);
    check_artifact_id(&metadata, result);
    check_timestamps(&metadata, result);
    check_summary(&metadata, result);
}

pub fn parse_metadata(raw: &str) -> Result<Metadata, serde_json::Error> {
    serde_json::from_str(raw)
}

fn check_required_fields(metadata: &Metadata, result: &mut ValidationResult) {
    for field in REQUIRED_METADATA_FIELDS {
        if !metadata.get(field).is_some_and(is_truthy) {
            result.error(format!("Missing required metadata field: {field}"));
        }
    }
}

fn check_hc_version(metadata: &Metadata, result: &mut ValidationResult) {
    let Some(value) = metadata.get("hc_version") else {
        return;
    };
    if value.as_str() != Some(EXPECTED_HC_VERSION) {
        result.warning(format!(
            "hc_version mismatch: expected '{EXPECTED_HC_VERSION}', found '{}'",
            display_value(value)
        ));
    }
}

fn check_hc_type(metadata: &Metadata, result: &mut ValidationResult) {
    let Some(value) = metadata.get("hc_type") else {
        return;
    };
    if !value.as_str().is_some_and(|hc_type| ALLOWED_HC_TYPES.contains(&hc_type)) {
        result.error(format!(
            "Invalid hc_type '{}': must be one of {}",
            display_value(value),
            ALLOWED_HC_TYPES.join(", ")
        ));
    }
}

fn check_artifact_id(metadata: &Metadata, result: &mut ValidationResult) {
    let Some(value) = metadata.get("artifact_id") else {
        return;
    };
    if !value.as_str().is_some_and(|id| ARTIFACT_ID.is_match(id)) {
        result.warning(format!(
            "artifact_id '{}' does not follow the hc-{{type}}-{{slug}}-{{number}} convention",
            display_value(value)
        ));
    }
}

fn check_timestamps(metadata: &Metadata, result: &mut ValidationResult) {
    for field in TIMESTAMP_FIELDS {
        let Some(value) = metadata.get(field) else {
            continue;
        };
        if !value.as_str().is_some_and(is_iso_timestamp) {
            result.error(format!(
                "Invalid timestamp in '{field}': {}",
                display_value(value)
            ));
        }
    }
}

/// Word count stands in for a token count here: the summary is split on whitespace
/// runs, which only approximates what a model tokenizer would produce.
fn check_summary(metadata: &Metadata, result: &mut ValidationResult) {
    let Some(value) = metadata.get("summary") else {
        return;
    };
    let words = value.as_str().map(count_words).unwrap_or(0);
    if words < SUMMARY_MIN_TOKENS {
        let (low, high) = SUMMARY_TARGET_TOKENS;
        result.warning(format!(
            "Summary is short ({words} words); aim for {low}-{high} tokens"
        ));
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// JSON truthiness: null, false, zero and empty strings/arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

const ZONED_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Accepts ISO 8601 date-times at second or minute precision, with a `Z` or numeric
/// offset or none, and plain dates.
pub fn is_iso_timestamp(raw: &str) -> bool {
    if DateTime::parse_from_rfc3339(raw).is_ok() {
        return true;
    }

    let zoned = match raw.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => raw.to_string(),
    };

    ZONED_DATETIME_FORMATS
        .iter()
        .any(|format| DateTime::parse_from_str(&zoned, format).is_ok())
        || NAIVE_DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(raw, format).is_ok())
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
