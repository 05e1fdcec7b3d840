//! Blocking HTTP transport
//!
//! Sends one [`ResolvedRequest`] and reads the whole response into memory.
//! There are no retries: a failure is reported once and the process exits.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::debug;

use crate::errors::MealieError;
use crate::request::{RequestBody, ResolvedRequest};
use crate::uploads::build_multipart_form;

/// User agent sent with every request
pub const USER_AGENT_STRING: &str = concat!("mealie-api/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// A fully read HTTP response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub reason: Option<String>,
    /// Final URL after redirects
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub elapsed: Duration,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or_default()
    }

    /// Body decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Build the HTTP client with the configured timeout
pub fn build_client(timeout_secs: f64) -> Result<Client, MealieError> {
    let mut builder = Client::builder().user_agent(USER_AGENT_STRING);

    if timeout_secs > 0.0 {
        let timeout = Duration::try_from_secs_f64(timeout_secs)
            .map_err(|e| MealieError::Config(format!("Invalid timeout {}: {}", timeout_secs, e)))?;
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Send the request and read the response
pub fn send(client: &Client, request: &ResolvedRequest, timeout_secs: f64) -> Result<ApiResponse, MealieError> {
    let mut builder = client
        .request(request.method.into(), request.url.clone())
        .headers(request.headers.clone());

    builder = match &request.body {
        RequestBody::Empty => builder,
        RequestBody::Json(value) => builder.body(serde_json::to_vec(value)?),
        RequestBody::Multipart(fields) => builder.multipart(build_multipart_form(fields)?),
    };

    debug!(method = %request.method, url = %request.url, "Sending request");

    let started = Instant::now();
    let response = builder.send().map_err(|e| map_send_error(e, timeout_secs))?;

    let status = response.status();
    let url = response.url().to_string();
    let headers = response
        .headers()
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
        .collect();
    let body = response
        .bytes()
        .map_err(|e| map_send_error(e, timeout_secs))?
        .to_vec();
    let elapsed = started.elapsed();

    debug!(
        status = status.as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        size = body.len(),
        "Response received"
    );

    Ok(ApiResponse {
        status: status.as_u16(),
        reason: status.canonical_reason().map(String::from),
        url,
        headers,
        body,
        elapsed,
    })
}

fn map_send_error(error: reqwest::Error, timeout_secs: f64) -> MealieError {
    if error.is_timeout() {
        MealieError::Timeout(timeout_secs)
    } else {
        MealieError::Request(error)
    }
}
