//! Response body formatters

pub mod html;
pub mod json;

pub use html::format_html;
pub use json::{format_json, format_value, JsonFormatterOptions};
