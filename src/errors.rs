//! Error types for mealie-api

use thiserror::Error;

/// Main error type for mealie-api
#[derive(Error, Debug)]
pub enum MealieError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid JSON payload - {message}")]
    InvalidPayload {
        message: String,
        original: String,
        attempted: String,
    },

    #[error("{0} environment variable is not set")]
    MissingEnv(&'static str),

    #[error("Unsupported HTTP method: {0} (expected GET, POST, PUT, PATCH or DELETE)")]
    InvalidMethod(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("Timeout after {0:.1} seconds")]
    Timeout(f64),

    #[error("Config error: {0}")]
    Config(String),
}

impl MealieError {
    /// A follow-up line telling the user how to fix the problem, if there is one
    pub fn hint(&self) -> Option<String> {
        match self {
            MealieError::MissingEnv("MEALIE_URL") => {
                Some("Set it with: export MEALIE_URL='https://your-mealie-instance.com'".to_string())
            }
            MealieError::MissingEnv("MEALIE_TOKEN") => {
                Some("Set it with: export MEALIE_TOKEN='your-api-token'".to_string())
            }
            MealieError::InvalidPayload { original, attempted, .. } => Some(format!(
                "Original payload: {}\nAttempted fix: {}",
                original, attempted
            )),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MealieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_hint() {
        let err = MealieError::MissingEnv("MEALIE_URL");
        assert_eq!(err.to_string(), "MEALIE_URL environment variable is not set");
        assert!(err.hint().unwrap().contains("export MEALIE_URL="));

        let err = MealieError::MissingEnv("MEALIE_TOKEN");
        assert!(err.hint().unwrap().contains("export MEALIE_TOKEN="));
    }

    #[test]
    fn test_invalid_payload_hint_shows_both_versions() {
        let err = MealieError::InvalidPayload {
            message: "expected value at line 1 column 1".to_string(),
            original: "{bad\\ }".to_string(),
            attempted: "{bad }".to_string(),
        };
        let hint = err.hint().unwrap();
        assert!(hint.contains("Original payload: {bad\\ }"));
        assert!(hint.contains("Attempted fix: {bad }"));
    }

    #[test]
    fn test_no_hint_for_plain_errors() {
        assert!(MealieError::FileNotFound("/x".to_string()).hint().is_none());
    }
}
