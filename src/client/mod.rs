//! HTTP client functionality

pub mod http;

pub use http::{build_client, send, ApiResponse, DEFAULT_TIMEOUT_SECS, USER_AGENT_STRING};
