//! Output handling (formatting, colors, printing)

pub mod formatters;
pub mod printer;
pub mod terminal;

pub use printer::{
    print_raw_response, print_request_summary, print_response, print_verbose_request, print_verbose_response,
    status_line,
};
pub use terminal::Styler;
