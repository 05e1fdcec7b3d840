//! Configuration: optional config file and required API settings

mod file;
mod settings;

pub use file::{Config, CONFIG_DIR_ENV};
pub use settings::{ApiSettings, TOKEN_ENV, URL_ENV};
