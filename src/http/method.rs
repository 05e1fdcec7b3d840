//! HTTP methods understood by the Mealie API wrapper

use std::fmt;
use std::str::FromStr;

use crate::errors::MealieError;

/// HTTP method of a resolved request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// All supported methods
pub(crate) const SUPPORTED_METHODS: &[Method] = &[
    Method::Get,
    Method::Post,
    Method::Put,
    Method::Patch,
    Method::Delete,
];

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a payload is sent along with this method
    pub fn carries_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }

    /// Resolve the method for a request: explicit always wins, otherwise
    /// infer from whether there is a payload.
    pub fn resolve(explicit: Option<Method>, has_payload: bool) -> Method {
        explicit.unwrap_or_else(|| infer(has_payload))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = MealieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SUPPORTED_METHODS
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MealieError::InvalidMethod(s.to_string()))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Infer HTTP method based on whether the request has a payload
pub fn infer(has_payload: bool) -> Method {
    if has_payload {
        Method::Post
    } else {
        Method::Get
    }
}
