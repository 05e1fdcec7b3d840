//! Terminal colors
//!
//! ANSI 256-color helpers and a [`Styler`] that only applies them when the
//! environment allows colors.

pub mod colors {
    pub const GREY: u8 = 102;      // #7D7D7D - Punctuation, secondary
    pub const AQUA: u8 = 109;      // #7A9EB5 - Numbers, info
    pub const ORANGE: u8 = 208;    // #F2913D - Warnings, PUT/PATCH
    pub const RED: u8 = 167;       // #E34F45 - Errors, DELETE
    pub const BLUE: u8 = 68;       // #426BD1 - Names, labels
    pub const GREEN: u8 = 71;      // #63C27A - Success, GET
    pub const YELLOW: u8 = 185;    // #CCCC3D - Section titles, POST
}

/// ANSI escape code constants
pub const RESET: &str = "\x1b[0m";

/// Generate foreground color escape code
#[inline]
pub fn fg(color: u8) -> String {
    format!("\x1b[38;5;{}m", color)
}

/// Generate bold foreground color escape code
#[inline]
pub fn bold_fg(color: u8) -> String {
    format!("\x1b[1;38;5;{}m", color)
}

/// Colorize text with a foreground color
#[inline]
pub fn colorize(text: &str, color: u8) -> String {
    format!("{}{}{}", fg(color), text, RESET)
}

/// Colorize text with bold foreground color
#[inline]
pub fn bold(text: &str, color: u8) -> String {
    format!("{}{}{}", bold_fg(color), text, RESET)
}

/// Applies colors when enabled, passes text through otherwise
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, color: u8, strong: bool) -> String {
        match (self.enabled, strong) {
            (false, _) => text.to_string(),
            (true, true) => bold(text, color),
            (true, false) => colorize(text, color),
        }
    }

    /// Error message (red)
    pub fn error(&self, text: &str) -> String {
        self.paint(text, colors::RED, true)
    }

    /// Section titles and notices (yellow)
    pub fn highlight(&self, text: &str) -> String {
        self.paint(text, colors::YELLOW, false)
    }

    /// Info message (aqua)
    pub fn info(&self, text: &str) -> String {
        self.paint(text, colors::AQUA, false)
    }

    /// Label/heading (blue)
    pub fn label(&self, text: &str) -> String {
        self.paint(text, colors::BLUE, false)
    }

    /// Secondary/muted text (grey)
    pub fn muted(&self, text: &str) -> String {
        self.paint(text, colors::GREY, false)
    }

    /// Status line colored by HTTP status class
    pub fn http_status(&self, code: u16, text: &str) -> String {
        let color = match code / 100 {
            2 => colors::GREEN,
            3 => colors::YELLOW,
            4 | 5 => colors::RED,
            _ => colors::ORANGE,
        };
        self.paint(text, color, true)
    }
}
