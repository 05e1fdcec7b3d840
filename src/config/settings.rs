//! API connection settings read from the environment

use crate::cli::SecretString;
use crate::errors::MealieError;

/// Base URL of the Mealie API
pub const URL_ENV: &str = "MEALIE_URL";

/// Bearer token for the Mealie API
pub const TOKEN_ENV: &str = "MEALIE_TOKEN";

/// Where requests go and how they authenticate
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL without trailing slash
    pub base_url: String,
    pub token: SecretString,
}

impl ApiSettings {
    pub fn new(base_url: &str, token: impl Into<SecretString>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, MealieError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    /// Unset and blank variables are both treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MealieError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(MealieError::MissingEnv(name))
        };

        let base_url = non_blank(URL_ENV)?;
        let token = non_blank(TOKEN_ENV)?;

        Ok(Self::new(&base_url, token))
    }
}
