//! Exit status codes for the CLI
//!
//! mealie-api follows standard Unix exit code conventions:
//! - 0: Success (HTTP 2xx, offline mode, help output)
//! - 1: Any error (bad input, missing environment, transport failure, non-2xx response)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution
    Success = 0,
    /// Input error, transport error or non-2xx response
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Map an HTTP status code to the process exit status.
    ///
    /// Only 2xx responses count as success; the API wrapper has no
    /// notion of "expected" redirects or errors.
    pub fn from_http_status(status_code: u16) -> Self {
        if (200..300).contains(&status_code) {
            ExitStatus::Success
        } else {
            ExitStatus::Error
        }
    }
}
