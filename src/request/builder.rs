//! Request builder
//!
//! Turns one [`Invocation`] into exactly one [`ResolvedRequest`]: picks the
//! method, joins the URL, chooses between a JSON and a multipart body and
//! sets the authentication headers. Nothing here touches the network.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};
use url::Url;

use crate::cli::Args;
use crate::config::ApiSettings;
use crate::errors::MealieError;
use crate::http::Method;
use crate::uploads::{fields_from_payload, has_file_reference, MultipartField};

use super::payload::{parse_payload, Payload};

/// Output and encoding switches given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub raw: bool,
    pub verbose: bool,
    pub multipart: bool,
}

/// One parsed command-line invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    pub endpoint: String,
    pub payload: Option<JsonValue>,
    pub method: Option<Method>,
    pub flags: Flags,
    /// The payload only parsed after undoing shell escapes
    pub payload_repaired: bool,
}

impl Invocation {
    /// Validate the positional arguments. Fails on malformed JSON or an
    /// unknown method, before anything else happens.
    pub fn from_args(args: &Args) -> Result<Self, MealieError> {
        let parsed = parse_payload(args.payload.as_deref())?;
        let method = args
            .method
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .map(str::parse::<Method>)
            .transpose()?;

        let (payload, payload_repaired) = match parsed {
            Some(Payload { value, repaired }) => (Some(value), repaired),
            None => (None, false),
        };

        Ok(Self {
            endpoint: args.endpoint.clone(),
            payload,
            method,
            flags: Flags {
                raw: args.raw,
                verbose: args.verbose,
                multipart: args.multipart,
            },
            payload_repaired,
        })
    }
}

/// Request body variants
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// JSON body
    Json(JsonValue),
    /// Multipart form data
    Multipart(Vec<MultipartField>),
}

impl RequestBody {
    pub fn kind(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }

    /// Content type announced for this body
    pub fn content_type(&self) -> &'static str {
        if self.is_multipart() {
            "multipart/form-data"
        } else {
            "application/json"
        }
    }
}

/// A request ready to be sent
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// Join the base URL and an endpoint with exactly one slash between them
pub fn build_url(base_url: &str, endpoint: &str) -> Result<Url, MealieError> {
    let base = base_url.trim_end_matches('/');
    let path = endpoint.trim().trim_start_matches('/');
    Ok(Url::parse(&format!("{}/{}", base, path))?)
}

/// Builds resolved requests against one API
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    settings: &'a ApiSettings,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(settings: &'a ApiSettings) -> Self {
        Self { settings }
    }

    pub fn build(&self, invocation: &Invocation) -> Result<ResolvedRequest, MealieError> {
        let url = build_url(&self.settings.base_url, &invocation.endpoint)?;
        let method = Method::resolve(invocation.method, invocation.payload.is_some());

        let body = match &invocation.payload {
            Some(payload) if method.carries_body() => {
                if invocation.flags.multipart || has_file_reference(payload) {
                    RequestBody::Multipart(fields_from_payload(payload, invocation.flags.multipart)?)
                } else {
                    RequestBody::Json(payload.clone())
                }
            }
            Some(_) => {
                warn!(method = %method, "Payload ignored: {} requests are sent without a body", method);
                RequestBody::Empty
            }
            None => RequestBody::Empty,
        };

        let headers = self.headers(&body)?;

        debug!(method = %method, url = %url, body = body.kind(), "Resolved request");

        Ok(ResolvedRequest {
            method,
            url,
            headers,
            body,
        })
    }

    fn headers(&self, body: &RequestBody) -> Result<HeaderMap, MealieError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::try_from(format!("Bearer {}", self.settings.token.as_str()))
            .map_err(|e| MealieError::Config(format!("MEALIE_TOKEN is not a valid header value: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // multipart gets its boundary from the transport
        if !body.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(headers)
    }
}
