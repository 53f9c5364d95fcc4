//! Binary entrypoint for the `strongrandom` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    match strongrandom::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
