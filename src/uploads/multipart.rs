//! Multipart form data handling
//!
//! A JSON object payload is turned into multipart fields: string values that
//! point at an existing file become file parts carrying the file's bytes,
//! everything else becomes a text field.

use std::path::{Path, PathBuf};

use reqwest::blocking::multipart::{Form, Part};
use serde_json::{Map, Value as JsonValue};
use tracing::info;

use crate::errors::MealieError;
use crate::mime::get_content_type;

/// Field names that always denote an upload when the multipart flag is set
pub const FILE_FIELD_NAMES: &[&str] = &["archive", "file", "upload", "attachment"];

/// A single multipart form field
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        path: PathBuf,
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl MultipartField {
    pub fn is_file(&self) -> bool {
        matches!(self, MultipartField::File { .. })
    }
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_home(value: &str) -> PathBuf {
    if let Some(rest) = value.strip_prefix("~/") {
        if let Some(home) = home::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(value)
}

/// Resolve a payload string to an existing regular file, if it names one
pub fn resolve_file(value: &str) -> Option<PathBuf> {
    if value.is_empty() || value.contains('\0') {
        return None;
    }
    let path = expand_home(value);
    path.is_file().then_some(path)
}

/// Whether any top-level string value of the payload names an existing file
pub fn has_file_reference(payload: &JsonValue) -> bool {
    payload
        .as_object()
        .map(|map| {
            map.values()
                .filter_map(JsonValue::as_str)
                .any(|s| resolve_file(s).is_some())
        })
        .unwrap_or(false)
}

/// A value the user clearly meant as a file, which must therefore exist
fn must_be_file(name: &str, value: &str) -> bool {
    FILE_FIELD_NAMES.iter().any(|f| f.eq_ignore_ascii_case(name)) || value.starts_with("~/")
}

/// Convert an object payload into multipart fields, loading referenced files.
///
/// With `strict` set (explicit `--multipart`), values that look like file
/// references but do not resolve are rejected instead of sent as text.
pub fn fields_from_payload(payload: &JsonValue, strict: bool) -> Result<Vec<MultipartField>, MealieError> {
    let map: &Map<String, JsonValue> = payload.as_object().ok_or_else(|| {
        MealieError::Multipart("multipart payload must be a JSON object".to_string())
    })?;

    let mut fields = Vec::with_capacity(map.len());

    for (name, value) in map {
        let field = match value {
            JsonValue::String(s) => match resolve_file(s) {
                Some(path) => load_file_field(name, &path)?,
                None if strict && must_be_file(name, s) => {
                    return Err(MealieError::FileNotFound(expand_home(s).display().to_string()));
                }
                None => MultipartField::Text {
                    name: name.clone(),
                    value: s.clone(),
                },
            },
            other => MultipartField::Text {
                name: name.clone(),
                value: other.to_string(),
            },
        };
        fields.push(field);
    }

    Ok(fields)
}

/// Read a file into a multipart file field
fn load_file_field(name: &str, path: &Path) -> Result<MultipartField, MealieError> {
    let bytes = std::fs::read(path)?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "file".to_string());

    let content_type = get_content_type(&filename)
        .unwrap_or_else(|| "application/octet-stream".to_string());

    info!(field = %name, path = %path.display(), size = bytes.len(), "Adding file upload");

    Ok(MultipartField::File {
        name: name.to_string(),
        path: path.to_path_buf(),
        filename,
        content_type,
        bytes,
    })
}

/// Build a reqwest multipart form from resolved fields
pub fn build_multipart_form(fields: &[MultipartField]) -> Result<Form, MealieError> {
    let mut form = Form::new();

    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name.clone(), value.clone()),
            MultipartField::File {
                name,
                filename,
                content_type,
                bytes,
                ..
            } => {
                let part = Part::bytes(bytes.clone())
                    .file_name(filename.clone())
                    .mime_str(content_type)
                    .map_err(|e| MealieError::Multipart(format!("Invalid MIME type: {}", e)))?;
                form.part(name.clone(), part)
            }
        };
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_detects_existing_file() {
        let (_dir, path) = temp_file("export.zip", b"PK\x03\x04");
        let payload = json!({"migration_type": "nextcloud", "archive": path.display().to_string()});
        assert!(has_file_reference(&payload));
    }

    #[test]
    fn test_no_file_reference() {
        let payload = json!({"name": "Pancakes", "archive": "/definitely/not/here.zip", "servings": 4});
        assert!(!has_file_reference(&payload));
        assert!(!has_file_reference(&json!(["a", "b"])));
        assert!(!has_file_reference(&json!({"name": ""})));
    }

    #[test]
    fn test_directories_are_not_files() {
        let dir = TempDir::new().unwrap();
        let payload = json!({"archive": dir.path().display().to_string()});
        assert!(!has_file_reference(&payload));
    }

    #[test]
    fn test_fields_carry_file_bytes() {
        let (_dir, path) = temp_file("photo.png", b"\x89PNG\r\n");
        let payload = json!({"image": path.display().to_string(), "extension": "png", "count": 2});

        let fields = fields_from_payload(&payload, false).unwrap();
        assert_eq!(fields.len(), 3);

        match &fields[0] {
            MultipartField::File { name, filename, content_type, bytes, .. } => {
                assert_eq!(name, "image");
                assert_eq!(filename, "photo.png");
                assert_eq!(content_type, "image/png");
                assert_eq!(bytes, b"\x89PNG\r\n");
            }
            other => panic!("expected file field, got {:?}", other),
        }
        assert_eq!(fields[1], MultipartField::Text { name: "extension".into(), value: "png".into() });
        assert_eq!(fields[2], MultipartField::Text { name: "count".into(), value: "2".into() });
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let (_dir, path) = temp_file("blob.qqqzzz", b"data");
        let fields = fields_from_payload(&json!({"file": path.display().to_string()}), true).unwrap();
        match &fields[0] {
            MultipartField::File { content_type, .. } => assert_eq!(content_type, "application/octet-stream"),
            other => panic!("expected file field, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_mode_rejects_missing_upload_fields() {
        let payload = json!({"migration_type": "nextcloud", "archive": "/no/such/export.zip"});
        let err = fields_from_payload(&payload, true).unwrap_err();
        assert!(matches!(err, MealieError::FileNotFound(ref p) if p == "/no/such/export.zip"));
    }

    #[test]
    fn test_strict_mode_keeps_ordinary_text() {
        let payload = json!({"url": "https://example.com/recipe.html"});
        let fields = fields_from_payload(&payload, true).unwrap();
        assert_eq!(
            fields,
            vec![MultipartField::Text { name: "url".into(), value: "https://example.com/recipe.html".into() }]
        );
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = fields_from_payload(&json!([1, 2]), true).unwrap_err();
        assert!(matches!(err, MealieError::Multipart(_)));
    }

    #[test]
    fn test_build_form() {
        let fields = vec![
            MultipartField::Text { name: "a".into(), value: "1".into() },
            MultipartField::File {
                name: "file".into(),
                path: PathBuf::from("x.txt"),
                filename: "x.txt".into(),
                content_type: "text/plain".into(),
                bytes: b"hello".to_vec(),
            },
        ];
        let form = build_multipart_form(&fields).unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("relative.txt"), PathBuf::from("relative.txt"));
        if let Some(home) = home::home_dir() {
            assert_eq!(expand_home("~/x.zip"), home.join("x.zip"));
        }
    }
}
