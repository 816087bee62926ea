//! Entry point for the `vacation` command-line interface.
#![forbid(unsafe_code)]

use vacation_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() {
    match vacation_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("vacation: {err}");
            std::process::exit(1);
        }
    }
}
