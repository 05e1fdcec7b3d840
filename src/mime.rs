//! MIME type utilities

use mime::Mime;

/// Kind of response body, as far as output formatting is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Html,
    Other,
}

/// Extract the bare `type/subtype` from a Content-Type header value, lowercased
///
/// # Examples
/// ```
/// use mealie_api::mime::essence;
/// assert_eq!(essence("Application/JSON; charset=utf-8"), "application/json");
/// ```
pub fn essence(header: &str) -> String {
    match header.parse::<Mime>() {
        Ok(m) => m.essence_str().to_lowercase(),
        Err(_) => header
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase(),
    }
}

/// Classify a Content-Type header value
pub fn body_kind(content_type: &str) -> BodyKind {
    let essence = essence(content_type);
    if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else if essence == "text/html" {
        BodyKind::Html
    } else {
        BodyKind::Other
    }
}

/// Get content type for a filename using mime_guess
pub fn get_content_type(filename: &str) -> Option<String> {
    mime_guess::from_path(filename)
        .first()
        .map(|m| m.to_string())
}
