//! Upload handling

pub mod multipart;

pub use multipart::{build_multipart_form, fields_from_payload, has_file_reference, MultipartField};
