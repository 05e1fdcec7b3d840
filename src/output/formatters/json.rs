//! JSON formatting

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;

/// JSON formatting options
#[derive(Debug, Clone)]
pub struct JsonFormatterOptions {
    /// Indentation in spaces (default: 2)
    pub indent: usize,
}

impl Default for JsonFormatterOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Parse and pretty-print a JSON document
pub fn format_json(json_str: &str, options: &JsonFormatterOptions) -> Result<String, String> {
    let value: JsonValue = serde_json::from_str(json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    format_value(&value, options)
}

/// Pretty-print an already parsed JSON value.
/// Non-ASCII characters are written as-is, never escaped.
pub fn format_value(value: &JsonValue, options: &JsonFormatterOptions) -> Result<String, String> {
    let indent = vec![b' '; options.indent];
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));

    value
        .serialize(&mut serializer)
        .map_err(|e| format!("JSON formatting error: {}", e))?;

    String::from_utf8(buf).map_err(|e| format!("UTF-8 error: {}", e))
}
