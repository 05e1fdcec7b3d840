//! Common test utilities for mealie-api integration tests
//!
//! This module provides shared test infrastructure:
//! - CLI invocation with a controlled environment
//! - Mock Mealie server helpers built on wiremock
//! - Test fixture management
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Token used by every test environment
pub const TEST_TOKEN: &str = "test-token-0123456789";

/// How the token shows up in verbose output
pub const MASKED_TOKEN: &str = "test-tok...6789";

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Parse the JSON printed after the `Response:` marker
    pub fn response_json(&self) -> Option<serde_json::Value> {
        let pos = self.stdout.find("Response:\n")?;
        serde_json::from_str(self.stdout[pos + "Response:\n".len()..].trim()).ok()
    }
}

/// Mock environment for testing
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    /// An environment without any Mealie settings
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            env_vars: HashMap::new(),
        }
    }

    /// An environment pointing at a mock server's `/api`
    pub fn for_server(server_uri: &str) -> Self {
        let mut env = Self::new();
        env.set_env("MEALIE_URL", &format!("{}/api", server_uri));
        env.set_env("MEALIE_TOKEN", TEST_TOKEN);
        env
    }

    /// Set an environment variable
    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Get the config directory path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content).expect("Failed to write config");
    }
}

/// Build the command with a clean, color-free environment
pub fn command(args: &[&str], env: &MockEnvironment) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mealie-api"));

    // keep failing tests from hanging on a dead server
    cmd.args(["--timeout", "5"]);
    cmd.args(args);

    cmd.env_remove("MEALIE_URL");
    cmd.env_remove("MEALIE_TOKEN");
    cmd.env_remove("MEALIE_API_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.env("MEALIE_API_CONFIG_DIR", env.config_path());
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd
}

/// Run the CLI with the given arguments and environment
pub fn mealie(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let output = command(args, env).output().expect("Failed to execute command");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}

/// Create a temporary file with the given name and content
pub fn create_temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = dir.path().join(name);
    std::fs::write(&file_path, content).expect("Failed to write temp file");
    (dir, file_path)
}

/// Number of requests a mock server has seen
pub async fn request_count(server: &wiremock::MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
