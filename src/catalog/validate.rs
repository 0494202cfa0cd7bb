//! Catalog validation.
//!
//! Narrows an untrusted JSON value into typed [`VideoRecord`]s. Nothing here
//! returns an error: malformed input yields fewer records.

use serde_json::{Map, Value};

use super::models::{
    FieldLabel, VideoRecord, AUTHOR_URL, CATEGORY, DESCRIPTION, DURATION, LINK, THUMBNAIL_URL,
    TITLE, VIEW_COUNT,
};
use crate::error_handling::{RejectReason, ValidationStats};

/// Validates a raw catalog value, discarding malformed entries.
///
/// A non-array root is treated as an empty catalog. Elements that are not
/// objects, or whose link is missing, not a string, or empty, are dropped.
/// Survivors keep their relative order.
pub fn validate(raw: &Value) -> Vec<VideoRecord> {
    let mut stats = ValidationStats::new();
    validate_with_stats(raw, &mut stats)
}

/// Same as [`validate`], recording each decision in `stats`.
pub fn validate_with_stats(raw: &Value, stats: &mut ValidationStats) -> Vec<VideoRecord> {
    let Some(entries) = raw.as_array() else {
        log::debug!("Catalog root is {}, expected an array", json_kind(raw));
        stats.record_rejected(RejectReason::RootNotArray);
        return Vec::new();
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match validate_entry(entry) {
            Ok(record) => {
                stats.record_accepted();
                records.push(record);
            }
            Err(reason) => {
                log::debug!("Skipping catalog entry #{}: {}", index, reason);
                stats.record_rejected(reason);
            }
        }
    }
    records
}

/// Validates a single catalog element.
pub(crate) fn validate_entry(entry: &Value) -> Result<VideoRecord, RejectReason> {
    let obj = entry.as_object().ok_or(RejectReason::NotAnObject)?;

    let link = match field(obj, LINK) {
        None => return Err(RejectReason::MissingLink),
        Some(Value::String(link)) if link.is_empty() => return Err(RejectReason::EmptyLink),
        Some(Value::String(link)) => link.clone(),
        Some(_) => return Err(RejectReason::LinkNotString),
    };

    Ok(VideoRecord {
        link,
        title: string_field(obj, TITLE),
        description: string_field(obj, DESCRIPTION),
        thumbnail_url: string_field(obj, THUMBNAIL_URL),
        duration: string_field(obj, DURATION),
        view_count: field(obj, VIEW_COUNT).and_then(view_count),
        author_url: string_field(obj, AUTHOR_URL),
        category: string_field(obj, CATEGORY),
    })
}

fn field<'a>(obj: &'a Map<String, Value>, label: FieldLabel) -> Option<&'a Value> {
    obj.get(label.name).or_else(|| obj.get(label.legacy))
}

/// Optional text field; any non-string value counts as absent.
fn string_field(obj: &Map<String, Value>, label: FieldLabel) -> Option<String> {
    field(obj, label).and_then(Value::as_str).map(str::to_owned)
}

/// Non-negative whole number, from either an integer or a whole-valued float.
fn view_count(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
