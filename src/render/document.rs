//! YAML config file rendering.

use serde_yaml::{Mapping, Value};

use super::{FieldValue, IncludedField};

/// Output when every field has its default value.
pub const EMPTY_DOCUMENT: &str =
    "# No custom configuration needed\n# All values are using defaults";

/// Renders a YAML mapping of the fields, keys in field order.
///
/// The whitelist is a YAML sequence. Serializing a mapping of strings and
/// integers cannot fail in practice; should it ever, the error is rendered
/// as a comment so this function stays total.
#[must_use]
pub fn config_file(fields: &[IncludedField<'_>]) -> String {
    if fields.is_empty() {
        return EMPTY_DOCUMENT.to_string();
    }

    let mapping: Mapping = fields
        .iter()
        .map(|field| (Value::from(field.key()), yaml_value(field.value())))
        .collect();

    serde_yaml::to_string(&Value::Mapping(mapping)).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize config file: {e}");
        format!("# Failed to render config file: {e}\n")
    })
}

fn yaml_value(value: FieldValue<'_>) -> Value {
    match value {
        FieldValue::Text(text) => Value::from(text),
        FieldValue::Number(n) => Value::from(n),
        FieldValue::List(entries) => {
            Value::Sequence(entries.iter().map(|entry| Value::from(entry.as_str())).collect())
        }
    }
}
