//! Binary data utilities

use content_inspector::{inspect, ContentType};
use humansize::{format_size, FormatSizeOptions, BINARY};

/// Check if data contains binary content
///
/// Uses statistical analysis via the content_inspector crate, which keeps
/// UTF-16 text (with its null bytes) out of the binary bucket.
pub fn is_binary(data: &[u8]) -> bool {
    matches!(inspect(data), ContentType::BINARY)
}

/// Format byte count as human-readable size (binary units)
pub fn format_bytes(bytes: u64, precision: usize) -> String {
    let options = FormatSizeOptions::from(BINARY)
        .decimal_places(precision)
        .decimal_zeroes(precision);
    format_size(bytes, options)
}
