//! Request building module
//!
//! Parses the payload argument and resolves an invocation into a concrete request.

mod builder;
mod payload;

pub use builder::{build_url, Flags, Invocation, RequestBody, RequestBuilder, ResolvedRequest};
pub use payload::{parse_payload, Payload};
