//! Command-line rendering.

use super::{FieldValue, IncludedField};

/// Program invocation every command line starts with.
pub const PROGRAM: &str = "./gmail-oauth-proxy server";

/// Renders the server command line.
///
/// Each field becomes `--<flag> <value>`; the whitelist repeats
/// `--ip-whitelist <entry>` once per entry. Values are not quoted.
#[must_use]
pub fn command_line(fields: &[IncludedField<'_>]) -> String {
    let mut parts = vec![PROGRAM.to_string()];

    for field in fields {
        let flag = field.flag();
        match field.value() {
            FieldValue::Text(text) => parts.push(format!("--{flag} {text}")),
            FieldValue::Number(n) => parts.push(format!("--{flag} {n}")),
            FieldValue::List(entries) => {
                parts.extend(entries.iter().map(|entry| format!("--{flag} {entry}")));
            }
        }
    }

    parts.join(" ")
}
