//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use livability_cli::CliError;

fn main() {
    match livability_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    }
}

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn report(err: &CliError) {
    eprintln!("livability: {err}");
}
