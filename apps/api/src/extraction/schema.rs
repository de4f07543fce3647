//! Coerces an untrusted extraction result into `ResumeContent`.
//!
//! Top-level fields are type-checked and fall back to empty values. Entries
//! inside `experience`, `education` and `project` must be objects but their
//! fields are kept exactly as the model produced them.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::resume::ResumeContent;

pub fn normalize_extraction(value: Value) -> ResumeContent {
    let Value::Object(mut root) = value else {
        warn!("Extraction result is not a JSON object; using empty resume content");
        return ResumeContent::default();
    };

    ResumeContent {
        professional_summary: take_string(&mut root, "professional_summary"),
        personal_info: take_object(&mut root, "personal_info"),
        skills: take_skills(&mut root),
        experience: take_entries(&mut root, "experience"),
        education: take_entries(&mut root, "education"),
        project: take_entries(&mut root, "project"),
    }
}

fn take_string(root: &mut Map<String, Value>, key: &str) -> String {
    match root.remove(key) {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            warn!("Extraction field '{key}' is not a string: {other}");
            String::new()
        }
    }
}

fn take_object(root: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match root.remove(key) {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            warn!("Extraction field '{key}' is not an object: {other}");
            Map::new()
        }
    }
}

/// Strings are kept (trimmed, blanks dropped), numbers and booleans are
/// stringified, anything else is dropped. A lone comma-separated string is
/// split.
fn take_skills(root: &mut Map<String, Value>) -> Vec<String> {
    let scalar = |v: Value| match v {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    };

    let skills: Vec<String> = match root.remove("skills") {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar).collect(),
        Some(Value::String(s)) => s.split(',').map(|p| p.trim().to_string()).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            warn!("Extraction field 'skills' is not a list: {other}");
            Vec::new()
        }
    };

    skills.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Keeps object entries as-is. A single object is treated as a one-entry list.
fn take_entries(root: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match root.remove(key) {
        Some(Value::Array(items)) => {
            let total = items.len();
            let kept: Vec<Value> = items.into_iter().filter(Value::is_object).collect();
            if kept.len() < total {
                warn!(
                    "Dropped {} non-object entries from '{key}'",
                    total - kept.len()
                );
            }
            kept
        }
        Some(obj @ Value::Object(_)) => vec![obj],
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            warn!("Extraction field '{key}' is not a list: {other}");
            Vec::new()
        }
    }
}
