//! Environment variable rendering.

use crate::config::defaults::ENV_PREFIX;

use super::{FieldValue, IncludedField};

/// Output when every field has its default value.
pub const EMPTY_ENVIRONMENT: &str = "# No environment variables needed";

/// Renders one `export` line per field.
///
/// String values are double-quoted and numbers are not. The whitelist is a
/// single comma-joined assignment.
#[must_use]
pub fn environment_variables(fields: &[IncludedField<'_>]) -> String {
    if fields.is_empty() {
        return EMPTY_ENVIRONMENT.to_string();
    }

    fields
        .iter()
        .map(|field| {
            let name = field.env_suffix();
            match field.value() {
                FieldValue::Text(text) => format!("export {ENV_PREFIX}{name}=\"{text}\""),
                FieldValue::Number(n) => format!("export {ENV_PREFIX}{name}={n}"),
                FieldValue::List(entries) => {
                    format!("export {ENV_PREFIX}{name}=\"{}\"", entries.join(","))
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
