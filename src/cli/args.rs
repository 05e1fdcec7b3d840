//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;

/// A string that redacts its value in Debug output to prevent credential leakage
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(pub String);

impl SecretString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form for display: first 8 and last 4 characters, or `***`
    /// when the secret is too short to reveal anything safely.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > 12 {
            let head: String = chars[..8].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        } else {
            "***".to_string()
        }
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "SecretString(\"\")")
        } else {
            write!(f, "SecretString(\"[REDACTED]\")")
        }
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "")
        } else {
            write!(f, "[REDACTED]")
        }
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString(s.to_string())
    }
}

/// Longest accepted request timeout, one day
pub const MAX_TIMEOUT_SECS: f64 = 86_400.0;

/// Parse `--timeout`: a finite number of seconds, 0 disables the timeout
fn parse_timeout(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;

    if !secs.is_finite() || !(0.0..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(format!("timeout must be between 0 and {} seconds", MAX_TIMEOUT_SECS));
    }

    Ok(secs)
}

/// mealie-api - call the Mealie REST API from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "mealie-api", version, about, long_about = None)]
#[command(args_override_self = true)]
#[command(after_help = "\
Examples:
  mealie-api recipes
  mealie-api recipes --raw
  mealie-api recipes '{\"name\":\"My Recipe\"}' POST
  mealie-api recipes/123 '{\"name\":\"Updated Recipe\"}' PUT
  mealie-api recipes/123 '' DELETE
  mealie-api groups/migrations '{\"migration_type\":\"nextcloud\",\"archive\":\"~/export.zip\"}' POST --multipart

Environment:
  MEALIE_URL    Base URL of the Mealie API
  MEALIE_TOKEN  API token for authentication

See https://docs.mealie.io/api/redoc/ for API documentation.")]
pub struct Args {
    /// API endpoint (e.g. recipes, users/self)
    #[arg(value_name = "ENDPOINT")]
    pub endpoint: String,

    /// JSON payload for POST/PUT/PATCH requests
    #[arg(value_name = "PAYLOAD")]
    pub payload: Option<String>,

    /// HTTP method: GET, POST, PUT, PATCH, DELETE
    /// (default: GET, or POST if a payload is given)
    #[arg(value_name = "METHOD")]
    pub method: Option<String>,

    /// Send the payload as multipart/form-data instead of JSON
    #[arg(short = 'm', long = "multipart", action = ArgAction::SetTrue)]
    pub multipart: bool,

    /// Print the raw response body only, for piping to other tools
    #[arg(short = 'r', long = "raw", action = ArgAction::SetTrue)]
    pub raw: bool,

    /// Show detailed request and response information
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Build and print the request without sending it
    #[arg(long = "offline", action = ArgAction::SetTrue)]
    pub offline: bool,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = 30.0, value_parser = parse_timeout)]
    pub timeout: f64,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Diagnostic log format: text (default) or json (JSON Lines)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Enable debug logging and full error details
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

/// Log format for diagnostic output
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
