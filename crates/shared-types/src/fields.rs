use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Turn a snake_case wire key into a label: `hearing_date` -> `Hearing date`.
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a JSON value for display. Arrays are joined with ", ", null is "—".
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Label/value rows for the opaque fields of a record, sorted by key.
pub fn field_rows(extra: &Map<String, Value>) -> Vec<(String, String)> {
    let mut keys: Vec<&String> = extra.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|k| (humanize_key(k), display_value(&extra[k])))
        .collect()
}

/// Accept identifiers sent either as JSON strings or numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
