//! mealie-api library interface
//!
//! A command-line wrapper around the Mealie recipe manager REST API.
//!
//! # Module Organization
//!
//! - [`request`] - Payload parsing and the request builder (method inference, body shaping)
//! - [`uploads`] - Multipart field detection and file loading
//! - [`client`] - Blocking HTTP transport
//! - [`output`] - Response formatting and printing
//! - [`errors`] - Error types (MealieError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod binary;
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod http;
pub mod logging;
pub mod mime;
pub mod output;
pub mod request;
pub mod status;
pub mod uploads;
