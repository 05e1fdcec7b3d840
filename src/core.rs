use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use crate::cli::Args;
use crate::client::{build_client, send};
use crate::config::{ApiSettings, Config};
use crate::context::Environment;
use crate::errors::MealieError;
use crate::logging;
use crate::output::{
    print_raw_response, print_request_summary, print_response, print_verbose_request, print_verbose_response,
    Styler,
};
use crate::request::{Invocation, RequestBuilder};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Loads the config file, parses arguments, sets up logging and runs one
/// request. Every failure ends up as an exit status; nothing panics out.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = config.merge_default_options(args);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    logging::init(parsed.log_format, parsed.debug);
    debug!(config_dir = %config.config_dir.display(), args = ?parsed, "Starting");

    if parsed.no_color {
        env.disable_colors();
    }

    match program(&parsed, &env) {
        Ok(status) => status,
        Err(e) => handle_error(e, parsed.debug, &env),
    }
}

/// Resolve, send and print one request.
///
/// Local input errors, including an unusable timeout, surface before the
/// request is printed or sent.
pub fn program(args: &Args, env: &Environment) -> Result<ExitStatus, MealieError> {
    let styler = Styler::new(env.colors);

    let settings = ApiSettings::from_env()?;
    let invocation = Invocation::from_args(args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if invocation.payload_repaired && !invocation.flags.raw {
        writeln!(out, "{}", styler.info("Fixed shell escapes in JSON payload"))?;
    }

    let request = RequestBuilder::new(&settings).build(&invocation)?;
    let client = build_client(args.timeout)?;

    if args.offline {
        print_verbose_request(&mut out, &styler, &request, args.timeout)?;
        return Ok(ExitStatus::Success);
    }

    if invocation.flags.verbose {
        print_verbose_request(&mut out, &styler, &request, args.timeout)?;
    } else if !invocation.flags.raw {
        print_request_summary(&mut out, &styler, &request, invocation.payload.as_ref())?;
    }
    out.flush()?;

    let response = send(&client, &request, args.timeout)?;

    if invocation.flags.verbose {
        print_verbose_response(&mut out, &styler, &response)?;
    }

    if invocation.flags.raw {
        print_raw_response(&mut out, &response)?;
    } else {
        print_response(&mut out, &styler, &response)?;
    }

    Ok(ExitStatus::from_http_status(response.status))
}

fn handle_error(error: MealieError, debug: bool, env: &Environment) -> ExitStatus {
    let styler = Styler::new(env.colors && env.stderr_isatty);

    let message = if debug {
        format!("Error: {:?}", error)
    } else {
        format!("Error: {}", error)
    };
    eprintln!("{}", styler.error(&message));

    if let Some(hint) = error.hint() {
        eprintln!("{}", hint);
    }

    ExitStatus::Error
}
