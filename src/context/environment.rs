//! Execution environment (terminal capabilities)

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub stdout_isatty: bool,
    pub stderr_isatty: bool,
    /// Whether ANSI colors may be written to stdout
    pub colors: bool,
}

impl Environment {
    /// Detect the environment of the current process
    pub fn init() -> Self {
        let stdout_isatty = atty::is(atty::Stream::Stdout);
        Self {
            stdout_isatty,
            stderr_isatty: atty::is(atty::Stream::Stderr),
            colors: detect_color_support(stdout_isatty, std::env::var_os("NO_COLOR").is_some()),
        }
    }

    pub fn disable_colors(&mut self) {
        self.colors = false;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::init()
    }
}

/// Colors only go to an interactive terminal that has not opted out
fn detect_color_support(stdout_isatty: bool, no_color: bool) -> bool {
    if !stdout_isatty || no_color {
        return false;
    }

    !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
}
