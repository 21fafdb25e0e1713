use std::env;
use std::io::{stderr, stdout};
use std::process::ExitCode;

use argsift_cli::joinargs;

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();

    match joinargs::run(&argv, stdout().lock(), stderr().lock()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
