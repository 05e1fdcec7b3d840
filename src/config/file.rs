//! Config file handling

use std::path::{Path, PathBuf};

use crate::errors::MealieError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "MEALIE_API_CONFIG_DIR";

/// mealie-api configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Flags prepended to every invocation (`[defaults] options`)
    pub default_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default config directory
    pub fn load() -> Result<Self, MealieError> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load configuration from `config.toml` inside `config_dir`.
    /// A missing file is not an error.
    pub fn load_from(config_dir: &Path) -> Result<Self, MealieError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                default_options: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| MealieError::Config(format!("Failed to read config: {}", e)))?;

        let toml_value: toml::Value = toml::from_str(&content)
            .map_err(|e| MealieError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            default_options,
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("mealie-api"))
            .unwrap_or_else(|| PathBuf::from(".mealie-api"))
    }

    /// Insert the configured default flags right after the program name so
    /// that flags given on the command line take precedence.
    pub fn merge_default_options(&self, args: Vec<String>) -> Vec<String> {
        if self.default_options.is_empty() {
            return args;
        }

        let (flags, positional): (Vec<_>, Vec<_>) = self
            .default_options
            .iter()
            .partition(|opt| opt.starts_with('-'));

        if !positional.is_empty() {
            eprintln!("Warning: Positional arguments in default options are ignored: {:?}", positional);
            eprintln!("Only flags (starting with -) can be used in default options.");
        }

        if flags.is_empty() {
            return args;
        }

        let mut merged = Vec::with_capacity(args.len() + flags.len());

        if let Some(program) = args.first() {
            merged.push(program.clone());
        }

        merged.extend(flags.into_iter().cloned());
        merged.extend(args.into_iter().skip(1));

        merged
    }
}
