//! JSON payload parsing
//!
//! Payloads arrive as a single shell argument. Users frequently paste file
//! paths with shell escapes (`~/My\ Recipes/export.zip`) into the JSON, which
//! makes it invalid; those escapes are undone before giving up.

use serde_json::Value as JsonValue;

use crate::errors::MealieError;

/// Shell escape sequences removed when the payload is not valid JSON as given
const SHELL_ESCAPES: &[(&str, &str)] = &[
    ("\\ ", " "),
    ("\\(", "("),
    ("\\)", ")"),
    ("\\&", "&"),
    ("\\[", "["),
    ("\\]", "]"),
    ("\\{", "{"),
    ("\\}", "}"),
    ("\\;", ";"),
    ("\\>", ">"),
    ("\\<", "<"),
    ("\\|", "|"),
    ("\\$", "$"),
    ("\\`", "`"),
    ("\\'", "'"),
    ("\\\"", "\""),
];

/// A parsed payload
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub value: JsonValue,
    /// Shell escapes had to be removed to parse it
    pub repaired: bool,
}

/// Parse the payload argument.
///
/// Returns `Ok(None)` for a missing, blank or `null` payload.
pub fn parse_payload(raw: Option<&str>) -> Result<Option<Payload>, MealieError> {
    let text = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(None),
    };

    let (value, repaired) = match serde_json::from_str::<JsonValue>(text) {
        Ok(value) => (value, false),
        Err(_) => {
            let fixed = strip_shell_escapes(text);
            match serde_json::from_str::<JsonValue>(&fixed) {
                Ok(value) => (value, true),
                Err(e) => {
                    return Err(MealieError::InvalidPayload {
                        message: e.to_string(),
                        original: text.to_string(),
                        attempted: fixed,
                    })
                }
            }
        }
    };

    if value.is_null() {
        return Ok(None);
    }

    Ok(Some(Payload { value, repaired }))
}

/// Undo common shell escapes
pub(crate) fn strip_shell_escapes(text: &str) -> String {
    SHELL_ESCAPES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}
