use std::io::stdout;
use std::process::ExitCode;

use argsift_cli::cli_args::Args;
use argsift_cli::probe;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match probe::run(&args, stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
