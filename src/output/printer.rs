//! Request and response printing
//!
//! Everything the user sees on stdout is written here. Functions take any
//! [`Write`] so the exact output can be checked in tests.

use std::io::{self, Write};

use reqwest::header::{HeaderName, AUTHORIZATION};
use serde_json::Value as JsonValue;

use crate::binary::{format_bytes, is_binary};
use crate::cli::SecretString;
use crate::client::ApiResponse;
use crate::mime::{body_kind, BodyKind};
use crate::request::{RequestBody, ResolvedRequest};
use crate::uploads::MultipartField;

use super::formatters::{format_html, format_json, format_value, JsonFormatterOptions};
use super::terminal::Styler;

/// `content-type` -> `Content-Type`
fn display_name(name: &HeaderName) -> String {
    name.as_str()
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

/// Header value safe to show: bearer tokens are masked
fn display_value(name: &HeaderName, value: &str) -> String {
    if *name == AUTHORIZATION {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return format!("Bearer {}", SecretString::from(token).masked());
        }
    }
    value.to_string()
}

fn size_of(bytes: u64) -> String {
    if bytes > 1024 {
        format_bytes(bytes, 2)
    } else {
        format!("{} bytes", bytes)
    }
}

/// One-line summary printed before a normal (non-verbose) request
pub fn print_request_summary<W: Write>(
    out: &mut W,
    styler: &Styler,
    request: &ResolvedRequest,
    payload: Option<&JsonValue>,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        styler.label(&format!("Making {} request to: {}", request.method, request.url))
    )?;
    if let RequestBody::Multipart(fields) = &request.body {
        writeln!(out, "{}", styler.info("Content-Type: multipart/form-data"))?;
        for field in fields {
            if let MultipartField::File { name, path, .. } = field {
                writeln!(
                    out,
                    "{}",
                    styler.info(&format!("Adding file upload: {} -> {}", name, path.display()))
                )?;
            }
        }
    }
    if let Some(payload) = payload {
        writeln!(out, "{}", styler.highlight(&format!("Payload: {}", payload)))?;
    }
    writeln!(out)
}

/// Detailed request dump for `--verbose` and `--offline`
pub fn print_verbose_request<W: Write>(
    out: &mut W,
    styler: &Styler,
    request: &ResolvedRequest,
    timeout_secs: f64,
) -> io::Result<()> {
    writeln!(out, "{}", styler.label("=== HTTP REQUEST DEBUG INFO ==="))?;
    writeln!(out, "URL: {}", request.url)?;
    writeln!(out, "Method: {}", request.method)?;
    writeln!(out, "Timeout: {} seconds", timeout_secs)?;
    writeln!(out, "Content Type: {}", request.body.content_type())?;
    writeln!(out)?;

    writeln!(out, "{}", styler.highlight("Headers:"))?;
    for (name, value) in &request.headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        writeln!(out, "  {}: {}", display_name(name), display_value(name, &value))?;
    }
    writeln!(out)?;

    match &request.body {
        RequestBody::Empty => {
            writeln!(out, "{}", styler.highlight("Request Body: (empty)"))?;
        }
        RequestBody::Json(value) => {
            writeln!(out, "{}", styler.highlight("Request Body (JSON):"))?;
            let pretty = format_value(value, &JsonFormatterOptions::default()).unwrap_or_else(|_| value.to_string());
            writeln!(out, "{}", pretty)?;
        }
        RequestBody::Multipart(fields) => {
            writeln!(out, "{}", styler.highlight("Request Body (Multipart Form Data):"))?;
            for field in fields {
                match field {
                    MultipartField::Text { name, value } => writeln!(out, "  {}: {}", name, value)?,
                    MultipartField::File { name, path, bytes, .. } => writeln!(
                        out,
                        "  {}: {} ({})",
                        name,
                        path.display(),
                        size_of(bytes.len() as u64)
                    )?,
                }
            }
        }
    }
    writeln!(out)
}

/// Detailed response dump for `--verbose`
pub fn print_verbose_response<W: Write>(out: &mut W, styler: &Styler, response: &ApiResponse) -> io::Result<()> {
    writeln!(out, "{}", styler.label("=== HTTP RESPONSE DEBUG INFO ==="))?;
    writeln!(out, "Status Code: {}", response.status)?;
    writeln!(out, "Reason: {}", response.reason.as_deref().unwrap_or(""))?;
    writeln!(out, "URL: {}", response.url)?;
    writeln!(out, "Response Time: {:.2}ms", response.elapsed.as_secs_f64() * 1000.0)?;
    writeln!(out)?;

    writeln!(out, "{}", styler.highlight("Response Headers:"))?;
    for (name, value) in &response.headers {
        writeln!(out, "  {}: {}", name, value)?;
    }
    writeln!(out)?;

    writeln!(out, "Response Size: {}", size_of(response.body.len() as u64))?;
    writeln!(out)
}

/// `--raw`: the body exactly as received
pub fn print_raw_response<W: Write>(out: &mut W, response: &ApiResponse) -> io::Result<()> {
    out.write_all(&response.body)?;
    out.flush()
}

/// Status line such as `✓ Success (HTTP 200)`
pub fn status_line(status: u16) -> String {
    match status {
        200..=299 => format!("✓ Success (HTTP {})", status),
        400..=499 => format!("✗ Client Error (HTTP {})", status),
        500..=599 => format!("✗ Server Error (HTTP {})", status),
        _ => format!("! Unexpected Status (HTTP {})", status),
    }
}

/// Status line followed by the body, formatted by content type
pub fn print_response<W: Write>(out: &mut W, styler: &Styler, response: &ApiResponse) -> io::Result<()> {
    writeln!(out, "{}", styler.http_status(response.status, &status_line(response.status)))?;

    let text = response.text();
    let content = text.trim();

    if content.is_empty() {
        let message = if response.is_success() {
            "Success but no response body received"
        } else {
            "No response body received"
        };
        return writeln!(out, "{}", styler.highlight(message));
    }

    writeln!(out, "\nResponse:")?;

    let content_type = response.content_type();
    match body_kind(content_type) {
        BodyKind::Json => match format_json(content, &JsonFormatterOptions::default()) {
            Ok(pretty) => writeln!(out, "{}", pretty),
            Err(_) => {
                writeln!(out, "{}", styler.highlight("Response claims to be JSON but is not valid JSON:"))?;
                writeln!(out, "{}", content)
            }
        },
        BodyKind::Html => {
            writeln!(out, "{}", styler.highlight("HTML Response (parsed):"))?;
            writeln!(out, "{}", format_html(content))
        }
        BodyKind::Other => {
            if !content_type.is_empty() {
                writeln!(out, "{}", styler.highlight(&format!("Content-Type: {}", content_type)))?;
            }
            if is_binary(&response.body) {
                writeln!(
                    out,
                    "{}",
                    styler.muted(&format!("[binary data, {}; use --raw to save it]", size_of(response.body.len() as u64)))
                )
            } else {
                writeln!(out, "{}", content)
            }
        }
    }
}
