use mealie_api::context::Environment;
use mealie_api::core;
use mealie_api::status::ExitStatus;

/// Entry point - hands the process arguments to core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    core::run(args, env)
}
