use serde_json::{Map, Value};
use shared_types::NOT_AVAILABLE;

/// Multi-choice fields as `(outer key, inner list key)` pairs
pub const MULTI_CHOICE_FIELDS: [(&str, &str); 3] = [
    ("fair_services_sought", "services"),
    ("target_market", "target_group"),
    ("data_requirements", "data_type"),
];

/// Scalar fields that must never be null once normalized
const PLACEHOLDER_FIELDS: [&str; 2] = ["consultation_date", "country"];

/// Best-effort cleanup of a loosely-typed extraction payload.
///
/// Fills in the company name and placeholder scalars, and coerces the
/// multi-choice fields into lists. Enumeration membership is not checked here;
/// that happens when the record is built.
pub fn normalize(raw: Map<String, Value>, fallback_name: &str) -> Map<String, Value> {
    let mut cleaned = raw;

    let has_name = matches!(
        cleaned.get("company_name"),
        Some(Value::String(name)) if !name.trim().is_empty()
    );
    if !has_name {
        cleaned.insert(
            "company_name".to_string(),
            Value::String(fallback_name.to_string()),
        );
    }

    for field in PLACEHOLDER_FIELDS {
        if cleaned.get(field).map_or(true, Value::is_null) {
            cleaned.insert(field.to_string(), Value::String(NOT_AVAILABLE.to_string()));
        }
    }

    for (outer, inner) in MULTI_CHOICE_FIELDS {
        if let Some(Value::Object(nested)) = cleaned.get_mut(outer) {
            if let Some(value) = nested.get_mut(inner) {
                coerce_to_list(value);
            }
        }
    }

    cleaned
}

fn coerce_to_list(value: &mut Value) {
    let item = match value.take() {
        Value::Array(items) => {
            *value = Value::Array(items);
            return;
        }
        Value::String(single) => single,
        other => other.to_string(),
    };
    *value = Value::Array(vec![Value::String(item)]);
}
